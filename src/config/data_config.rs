//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 데이터 스토어 연결, 패스워드 해싱 설정을 관리합니다.

use super::ConfigError;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 안전하지 않은 기본 서명키 사용이 허용되는 환경인지 확인합니다.
    pub fn allows_insecure_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    /// `BCRYPT_COST` 값이 있으면 검증 후 사용하고, 없으면 환경별 기본값을 씁니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::InvalidValue` - 숫자가 아니거나 4-15 범위를 벗어난 경우
    pub fn resolve(env: &Environment, raw: Option<String>) -> Result<Self, ConfigError> {
        let bcrypt_cost = match raw {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BCRYPT_COST",
                        value,
                    });
                }
            },
            None => Self::bcrypt_cost_for_env(env),
        };
        Ok(Self { bcrypt_cost })
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트 (기본값: "0.0.0.0")
    pub host: String,
    /// 바인딩 포트 (기본값: 8080)
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 데이터 스토어 연결 설정
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// MongoDB 연결 URI
    pub mongodb_uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// Redis 연결 URL
    pub redis_url: String,
}
