//! API 응답 래퍼
//!
//! 모든 엔드포인트는 같은 봉투(envelope) 형식으로 응답합니다.
//!
//! ```json
//! { "success": true,  "data": { ... }, "message": "optional" }
//! { "success": false, "error": "Invalid token" }
//! { "success": false, "errors": ["Invalid email format", "..."] }
//! ```

use serde::{Deserialize, Serialize};

/// API 응답 래퍼
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            errors: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 메시지만 담은 성공 응답
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            errors: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
            errors: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: None,
            errors: Some(errors),
        }
    }
}
