//! 인증 서비스
//!
//! - [`TokenCodec`] - JWT 발급/검증 (상태 없음)
//! - [`AuthService`] - 로그인, 갱신, 로그아웃, 세션 검증

pub mod auth_service;
pub mod token_codec;

pub use auth_service::AuthService;
pub use token_codec::TokenCodec;
