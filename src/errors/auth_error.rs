//! 인증 코어 에러 분류
//!
//! 토큰 계열 에러(`InvalidToken`, `TokenExpired`, `TokenRevoked`, `TokenNotActive`)는
//! 내부적으로는 구분되어 로그와 테스트에 사용되지만, HTTP 경계에서는 모두
//! `401 "Invalid token"` 하나로 합쳐집니다.

use thiserror::Error;

use super::AppError;

/// 세션 스토어(Redis 등) 호출 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("store call timed out")]
    Timeout,

    #[error("store value could not be decoded: {0}")]
    Serialization(String),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(error: redis::RedisError) -> Self {
        if error.is_timeout() {
            StoreError::Timeout
        } else if error.is_connection_refusal() || error.is_connection_dropped() || error.is_io_error() {
            StoreError::Connection(error.to_string())
        } else if error.kind() == redis::ErrorKind::TypeError {
            StoreError::Serialization(error.to_string())
        } else {
            StoreError::Backend(error.to_string())
        }
    }
}

/// 인증/세션 코어 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// 이메일 또는 비밀번호 불일치
    #[error("invalid credentials")]
    InvalidCredentials,

    /// 서명 불일치, 형식 오류
    #[error("invalid token")]
    InvalidToken,

    /// 만료된 토큰
    #[error("token expired")]
    TokenExpired,

    /// 블랙리스트에 등록된 토큰
    #[error("token revoked")]
    TokenRevoked,

    /// 활성 세션 인덱스에 없는 토큰 (발급된 적 없음 / 로그아웃됨)
    #[error("token not active")]
    TokenNotActive,

    /// 클레임의 사용자 ID로 사용자를 찾을 수 없음
    #[error("user not found")]
    UserNotFound,

    /// 역할 불충분
    #[error("insufficient permissions")]
    Forbidden,

    /// 토큰 서명 실패 (암호화 라이브러리 오류)
    #[error("token signing failed: {0}")]
    Signing(String),

    /// 세션 스토어 장애 (데드라인 초과 제외)
    #[error(transparent)]
    Store(StoreError),

    /// 세션 스토어 또는 사용자 저장소 호출의 데드라인 초과
    #[error("operation timed out")]
    Timeout,

    /// 사용자 저장소 장애
    #[error("user lookup failed: {0}")]
    Lookup(String),
}

impl AuthError {
    /// 토큰 사용 불가를 뜻하는 에러인지 확인합니다.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken
                | AuthError::TokenExpired
                | AuthError::TokenRevoked
                | AuthError::TokenNotActive
        )
    }

    /// 재시도 가능한 일시적 장애인지 확인합니다.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AuthError::Store(_) | AuthError::Timeout | AuthError::Lookup(_)
        )
    }
}

// 데드라인 초과는 어느 저장소에서 왔든 `AuthError::Timeout` 하나로 보고
impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Timeout => AuthError::Timeout,
            other => AuthError::Store(other),
        }
    }
}

impl From<AppError> for AuthError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Timeout => AuthError::Timeout,
            other => AuthError::Lookup(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Invalid email or password".to_string())
            }
            AuthError::InvalidToken
            | AuthError::TokenExpired
            | AuthError::TokenRevoked
            | AuthError::TokenNotActive
            | AuthError::UserNotFound => AppError::Unauthorized("Invalid token".to_string()),
            AuthError::Forbidden => AppError::Forbidden("Insufficient permissions".to_string()),
            AuthError::Timeout => AppError::Timeout,
            other => AppError::InternalError(other.to_string()),
        }
    }
}
