//! # HTTP Request Handlers Module
//!
//! 각 핸들러는 요청 검증과 응답 포장만 담당하고, 서비스는 `web::Data`로 주입받습니다.
//!
//! ```text
//! Client ──► Middlewares (RateLimit, Auth) ──► Handlers ──► Services ──► Stores
//! ```
//!
//! - **`auth`**: 가입, 로그인, 토큰 갱신, 로그아웃
//! - **`users`**: 프로필 조회, 관리자용 사용자 조회

pub mod auth;
pub mod users;
