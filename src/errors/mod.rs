//! 에러 타입 모음
//!
//! - [`AppError`]: HTTP 경계 에러 (`actix_web::ResponseError`)
//! - [`AuthError`]: 인증/세션 코어 에러
//! - [`StoreError`]: 세션 스토어 호출 에러

pub mod auth_error;
#[allow(clippy::module_inception)]
pub mod errors;

pub use auth_error::{AuthError, StoreError};
pub use errors::{AppError, AppResult, ErrorContext};
