//! 도메인 모델
//!
//! - `role`: 사용자 역할
//! - `token`: 토큰 종류, 클레임, 토큰 쌍
//! - `auth`: 요청 컨텍스트에 주입되는 인증 사용자와 역할 요구사항

pub mod auth;
pub mod role;
pub mod token;

pub use auth::*;
pub use role::Role;
pub use token::*;
