//! HTTP 경계의 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 공통 응답 봉투(`{success:false, error}` / `{success:false, errors}`)로 변환합니다.
//!
//! 내부 상세(스토어 장애 원인, 서명 실패 사유 등)는 로그에만 남기고
//! 클라이언트에는 고정된 메시지만 전달합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AppError, AppResult};
//!
//! async fn profile(user_id: &str) -> AppResult<UserResponse> {
//!     let user = users.find_by_id(user_id).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
//!     Ok(user.into())
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::dto::ApiResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 필드별 입력값 검증 실패 (400 Bad Request)
    #[error("Validation failed: {0:?}")]
    ValidationErrors(Vec<String>),

    /// 잘못된 요청 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 인증 실패 (401 Unauthorized)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 권한 부족 (403 Forbidden)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// 리소스 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 요청 한도 초과 (429 Too Many Requests)
    #[error("Rate limit exceeded")]
    TooManyRequests,

    /// 데이터베이스 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 외부 호출 데드라인 초과 (500 Internal Server Error)
    #[error("operation timed out")]
    Timeout,
}

impl AppError {
    /// 클라이언트에 노출되는 메시지
    ///
    /// 500 계열은 상세 내용을 숨기고 고정 문구만 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationErrors(_) => "Validation failed".to_string(),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::TooManyRequests => {
                "Rate limit exceeded. Please try again later.".to_string()
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) | AppError::Timeout => {
                "Internal server error".to_string()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationErrors(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            AppError::DatabaseError(_) | AppError::InternalError(_) | AppError::Timeout => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        let body = match self {
            AppError::ValidationErrors(errors) => ApiResponse::validation(errors.clone()),
            other => ApiResponse::error(other.public_message()),
        };
        HttpResponse::build(status).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{} is invalid", field),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        AppError::ValidationErrors(messages)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(error: mongodb::error::Error) -> Self {
        AppError::DatabaseError(error.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
