//! 애플리케이션 전체 설정
//!
//! [`AppConfig`]는 `main`에서 한 번만 만들어지고, 이후 각 컴포넌트 생성자에
//! 참조로 전달됩니다.

use std::time::Duration as StdDuration;

use log::warn;

use super::duration::{parse_duration, positive_std};
use super::{
    ConfigError, DataConfig, Environment, JwtConfig, LimiterSettings, PasswordConfig,
    RateLimitConfig, ServerConfig, SessionConfig,
};

const DEV_ACCESS_SECRET: &str = "dev-access-secret-change-me";
const DEV_REFRESH_SECRET: &str = "dev-refresh-secret-change-me";

/// 시작 시점에 확정되는 전체 설정 묶음
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub data: DataConfig,
    pub jwt: JwtConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub password: PasswordConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// 필수 값 누락, 잘못된 기간 리터럴, 동일한 서명키 등은 모두 `ConfigError`로
    /// 반환됩니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 임의의 조회 함수로부터 설정을 구성합니다.
    ///
    /// 테스트에서는 프로세스 환경을 건드리지 않고 `HashMap` 기반 조회 함수를 넘깁니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let vars: HashMap<&str, &str> = [("ENVIRONMENT", "test")].into();
    /// let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()))?;
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let environment = var("ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Production);

        let server = ServerConfig {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number("PORT", var("PORT"), 8080u16)?,
        };

        let data = DataConfig {
            mongodb_uri: var("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: var("DATABASE_NAME").unwrap_or_else(|| "session_gate".to_string()),
            redis_url: var("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
        };

        let access_secret = secret(&environment, "JWT_SECRET", var("JWT_SECRET"), DEV_ACCESS_SECRET)?;
        let refresh_secret = secret(
            &environment,
            "JWT_REFRESH_SECRET",
            var("JWT_REFRESH_SECRET"),
            DEV_REFRESH_SECRET,
        )?;
        if access_secret == refresh_secret {
            return Err(ConfigError::IdenticalSecrets);
        }

        // 토큰 TTL은 음수도 허용 (즉시 만료 토큰 발급 용도)
        let jwt = JwtConfig {
            access_secret,
            refresh_secret,
            access_ttl: parse_duration(&var("JWT_EXPIRES_IN").unwrap_or_else(|| "24h".into()))?,
            refresh_ttl: parse_duration(
                &var("JWT_REFRESH_EXPIRES_IN").unwrap_or_else(|| "168h".into()),
            )?,
        };

        let defaults = SessionConfig::default();
        let session = SessionConfig {
            session_ttl: duration_or("SESSION_TTL", var("SESSION_TTL"), defaults.session_ttl)?,
            access_blacklist_ttl: duration_or(
                "ACCESS_BLACKLIST_TTL",
                var("ACCESS_BLACKLIST_TTL"),
                defaults.access_blacklist_ttl,
            )?,
            refresh_blacklist_ttl: duration_or(
                "REFRESH_BLACKLIST_TTL",
                var("REFRESH_BLACKLIST_TTL"),
                defaults.refresh_blacklist_ttl,
            )?,
            request_timeout: duration_or(
                "REQUEST_TIMEOUT",
                var("REQUEST_TIMEOUT"),
                defaults.request_timeout,
            )?,
            startup_timeout: duration_or(
                "STARTUP_TIMEOUT",
                var("STARTUP_TIMEOUT"),
                defaults.startup_timeout,
            )?,
        };

        let limits = RateLimitConfig::default();
        let rate_limit = RateLimitConfig {
            global: LimiterSettings {
                rate: parse_number("RATE_LIMIT_GLOBAL", var("RATE_LIMIT_GLOBAL"), limits.global.rate)?,
                interval: duration_or(
                    "RATE_LIMIT_GLOBAL_INTERVAL",
                    var("RATE_LIMIT_GLOBAL_INTERVAL"),
                    limits.global.interval,
                )?,
            },
            auth: LimiterSettings {
                rate: parse_number("RATE_LIMIT_AUTH", var("RATE_LIMIT_AUTH"), limits.auth.rate)?,
                interval: duration_or(
                    "RATE_LIMIT_AUTH_INTERVAL",
                    var("RATE_LIMIT_AUTH_INTERVAL"),
                    limits.auth.interval,
                )?,
            },
            sweep_interval: duration_or(
                "RATE_LIMIT_SWEEP_INTERVAL",
                var("RATE_LIMIT_SWEEP_INTERVAL"),
                limits.sweep_interval,
            )?,
        };

        let password = PasswordConfig::resolve(&environment, var("BCRYPT_COST"))?;

        Ok(Self {
            environment,
            server,
            data,
            jwt,
            session,
            rate_limit,
            password,
        })
    }
}

fn secret(
    environment: &Environment,
    name: &'static str,
    value: Option<String>,
    fallback: &str,
) -> Result<String, ConfigError> {
    match value {
        Some(v) => Ok(v),
        None if environment.allows_insecure_defaults() => {
            warn!("⚠️  {} 미설정 - 개발용 기본 서명키를 사용합니다", name);
            Ok(fallback.to_string())
        }
        None => Err(ConfigError::MissingVar(name)),
    }
}

fn duration_or(
    name: &'static str,
    value: Option<String>,
    default: StdDuration,
) -> Result<StdDuration, ConfigError> {
    match value {
        Some(literal) => positive_std(name, &literal),
        None => Ok(default),
    }
}

fn parse_number<T>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}
