//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 구조체를 정의합니다.
//! 요청 DTO는 `validator`로 검증되고, 응답은 모두 [`ApiResponse`] 봉투로 감쌉니다.
//!
//! ```text
//! dto/
//! ├── api_response.rs     # 공통 응답 봉투
//! ├── tokens/             # refresh / logout 요청
//! └── users/
//!     ├── request/        # register / login 요청
//!     └── response/       # 사용자 정보, 토큰 응답
//! ```

pub mod api_response;
pub mod tokens;
pub mod users;

pub use api_response::ApiResponse;
pub use tokens::*;
pub use users::*;
