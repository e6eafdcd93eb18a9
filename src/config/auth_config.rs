//! # Authentication Configuration Module
//!
//! JWT 서명키와 만료 시간, 세션 인덱스/블랙리스트 TTL, 요청 데드라인,
//! Rate Limiting 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="access-secret"
//! export JWT_REFRESH_SECRET="refresh-secret"
//! export JWT_EXPIRES_IN="24h"
//! export JWT_REFRESH_EXPIRES_IN="168h"
//!
//! export SESSION_TTL="24h"
//! export ACCESS_BLACKLIST_TTL="24h"
//! export REFRESH_BLACKLIST_TTL="48h"
//! export REQUEST_TIMEOUT="5s"
//! export STARTUP_TIMEOUT="10s"
//!
//! export RATE_LIMIT_GLOBAL="100"
//! export RATE_LIMIT_GLOBAL_INTERVAL="1m"
//! export RATE_LIMIT_AUTH="20"
//! export RATE_LIMIT_AUTH_INTERVAL="1m"
//! export RATE_LIMIT_SWEEP_INTERVAL="5m"
//! ```

use std::fmt;
use std::time::Duration as StdDuration;

use chrono::Duration;

/// JWT 서명 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명합니다.
/// 한쪽 키로 서명된 토큰은 다른 쪽 검증을 통과할 수 없습니다.
#[derive(Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명키
    pub access_secret: String,
    /// 리프레시 토큰 서명키
    pub refresh_secret: String,
    /// 액세스 토큰 TTL (기본값: 24h)
    pub access_ttl: Duration,
    /// 리프레시 토큰 TTL (기본값: 168h)
    pub refresh_ttl: Duration,
}

// 서명키가 로그에 찍히지 않도록 직접 구현
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// 세션 저장소 관련 TTL 및 데드라인
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 활성 세션 인덱스(`<access_token> → user_id`) TTL
    pub session_ttl: StdDuration,
    /// 액세스 토큰 블랙리스트 TTL
    pub access_blacklist_ttl: StdDuration,
    /// 리프레시 토큰 블랙리스트 TTL (리프레시 토큰 자체보다 오래 유지)
    pub refresh_blacklist_ttl: StdDuration,
    /// 요청 단위 스토어/DB 호출 데드라인
    pub request_timeout: StdDuration,
    /// 시작 시 연결 확인 데드라인
    pub startup_timeout: StdDuration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_ttl: StdDuration::from_secs(24 * 3600),
            access_blacklist_ttl: StdDuration::from_secs(24 * 3600),
            refresh_blacklist_ttl: StdDuration::from_secs(48 * 3600),
            request_timeout: StdDuration::from_secs(5),
            startup_timeout: StdDuration::from_secs(10),
        }
    }
}

/// 하나의 Rate Limiter 인스턴스 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimiterSettings {
    /// 윈도우 내 허용 요청 수
    pub rate: usize,
    /// 슬라이딩 윈도우 길이
    pub interval: StdDuration,
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// `/api/v1` 전체에 적용되는 느슨한 리미터
    pub global: LimiterSettings,
    /// `/api/v1/auth`에 추가로 적용되는 엄격한 리미터
    pub auth: LimiterSettings,
    /// 유휴 키 정리 주기
    pub sweep_interval: StdDuration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            global: LimiterSettings {
                rate: 100,
                interval: StdDuration::from_secs(60),
            },
            auth: LimiterSettings {
                rate: 20,
                interval: StdDuration::from_secs(60),
            },
            sweep_interval: StdDuration::from_secs(300),
        }
    }
}
