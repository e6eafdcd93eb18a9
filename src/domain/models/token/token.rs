//! JWT 클레임 구조체와 토큰 쌍
//!
//! 서버 측에는 클레임 레코드가 없습니다. 토큰의 유효성은 서명된 페이로드와
//! 세션 스토어의 부가 상태(활성 인덱스, 블랙리스트)만으로 재구성됩니다.

use serde::{Deserialize, Serialize};

use crate::domain::models::role::Role;

/// 토큰 종류
///
/// 종류마다 서로 다른 서명키를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// API 호출용 단기 토큰
    Access,
    /// 토큰 쌍 갱신 전용 장기 토큰
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `user_id`: 사용자 ID
/// - `roles`: 사용자 권한 목록 (순서 유지)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰도 서로 다른 문자열이 되도록)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    pub roles: Vec<Role>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// JWT 토큰 쌍 구조체
///
/// 로그인과 갱신 시 클라이언트에게 함께 전달됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 항상 `"Bearer"`
    pub token_type: String,
    /// 액세스 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}
