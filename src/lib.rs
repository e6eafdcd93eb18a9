//! 세션 게이트
//!
//! JWT 액세스/리프레시 토큰 기반 인증 서비스입니다. 서명 검증만으로는 즉시
//! 로그아웃을 보장할 수 없으므로, 토큰 폐기와 활성 세션 확인은 세션 스토어
//! (Redis)에 기록된 상태로 판단합니다.
//!
//! # Features
//!
//! - **토큰 발급/검증**: 액세스와 리프레시 토큰을 서로 다른 키로 서명 (HS256)
//! - **1회용 리프레시**: 사용된 리프레시 토큰은 `SET NX`로 블랙리스트에 기록
//! - **로그아웃**: 두 토큰 블랙리스트와 세션 삭제를 하나의 배치로 적용
//! - **역할 기반 접근 제어**: Actix 미들웨어로 라우트 단위 적용
//! - **Rate Limiting**: 피어 IP 기준 슬라이딩 윈도우
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← RateLimit / AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, TokenCodec, UserService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SessionStore /  │
//! │ UserStore       │ ← Redis, MongoDB (테스트는 인메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let config = AppConfig::from_env()?;
//! let state = AppState::new(config, Arc::new(sessions), Arc::new(users));
//! App::new().configure(routes::configure(state.clone()));
//! ```

pub mod caching;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
