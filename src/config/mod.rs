//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 시작 시점에 [`AppConfig::from_env`]로 한 번만 읽어 구조체로 만들고,
//! 이후에는 각 컴포넌트 생성자에 참조로 전달합니다. 요청 처리 중에 환경 변수를
//! 다시 읽는 코드는 없습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, MongoDB/Redis, 패스워드 해싱 설정
//! - [`auth_config`] - JWT 서명키와 TTL, 세션/블랙리스트 TTL, Rate Limit 설정
//! - [`app_config`] - 위 설정을 묶는 [`AppConfig`]
//! - [`duration`] - `"24h"`, `"1h30m"`, `"-1s"` 형식의 기간 리터럴 파서
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use session_gate::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("bind: {}:{}", config.server.host, config.server.port);
//! println!("access ttl: {}s", config.jwt.access_ttl.num_seconds());
//! ```
//!
//! ## 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export JWT_SECRET="access-token-secret"
//! export JWT_REFRESH_SECRET="refresh-token-secret"   # JWT_SECRET과 달라야 함
//! export JWT_EXPIRES_IN="24h"
//! export JWT_REFRESH_EXPIRES_IN="168h"
//! ```

pub mod app_config;
pub mod auth_config;
pub mod data_config;
pub mod duration;

pub use app_config::*;
pub use auth_config::*;
pub use data_config::*;
pub use duration::parse_duration;

use thiserror::Error;

/// 설정 로딩 단계에서 발생하는 에러
///
/// 모두 시작 시점에 보고되며, 잘못된 값을 기본값으로 조용히 대체하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// 기간 리터럴 파싱 실패
    #[error("invalid duration literal: {0:?}")]
    InvalidDuration(String),

    /// 숫자 등 일반 값 파싱 실패
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    /// 액세스/리프레시 서명키가 동일함
    #[error("JWT_SECRET and JWT_REFRESH_SECRET must differ")]
    IdenticalSecrets,
}
