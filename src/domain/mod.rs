//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 객체 (User)
//! ├── DTOs      - 요청/응답 계약과 공통 응답 봉투
//! └── Models    - 역할, 토큰 클레임, 요청 컨텍스트의 인증 정보
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Caching, DB)
//! ```
//!
//! 엔티티는 외부로 직접 노출하지 않고, 항상 DTO로 변환해서 응답합니다.
//! 특히 `User::password_hash`는 어떤 응답에도 포함되지 않습니다.

pub mod dto;
pub mod entities;
pub mod models;

pub use dto::{
    ApiResponse, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
    RegisterResponse, TokenResponse, UserResponse,
};
pub use entities::User;
pub use models::{
    AuthenticatedUser, BearerToken, RequiredRoles, Role, TokenClaims, TokenKind, TokenPair,
};
