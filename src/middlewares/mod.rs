//! 요청 파이프라인 미들웨어
//!
//! - [`AuthMiddleware`] - Bearer 토큰 인증과 역할 검사
//! - [`RateLimit`] - 피어 IP 기준 슬라이딩 윈도우 요청 제한

pub mod auth_middleware;
mod auth_inner;
pub mod rate_limit_middleware;
pub mod rate_limiter;

pub use auth_middleware::AuthMiddleware;
pub use rate_limit_middleware::RateLimit;
pub use rate_limiter::RateLimiter;
