//! JWT 토큰 코덱
//!
//! 서명된 클레임을 불투명한 문자열로 인코딩/디코딩합니다. 상태가 없으며
//! 네트워크 호출도 없습니다.
//!
//! - 액세스/리프레시 토큰은 서로 다른 비밀키(HS256)로 서명합니다.
//! - 만료 검사는 leeway 없이 `exp > now`로 수행합니다.
//! - 모든 토큰에 무작위 `jti`가 들어가므로 같은 초에 발급된 토큰도 서로 다릅니다.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::models::role::Role;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::AuthError;

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKeys {
    fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// 종류별 비밀키를 보관하는 토큰 코덱
pub struct TokenCodec {
    access: SigningKeys,
    refresh: SigningKeys,
    access_ttl: Duration,
    refresh_ttl: Duration,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            access: SigningKeys::from_secret(&config.access_secret),
            refresh: SigningKeys::from_secret(&config.refresh_secret),
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
            validation,
        }
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn ttl(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_ttl,
            TokenKind::Refresh => self.refresh_ttl,
        }
    }

    /// 토큰을 발급합니다.
    ///
    /// `ttl`이 음수이면 이미 만료된 토큰이 만들어집니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Signing` - 서명 실패 (암호화 라이브러리 오류)
    pub fn issue(
        &self,
        kind: TokenKind,
        user_id: &str,
        roles: &[Role],
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            roles: roles.to_vec(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys(kind).encoding)
            .map_err(|e| AuthError::Signing(format!("{} token: {}", kind.as_str(), e)))
    }

    /// 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenExpired` - `exp <= now`
    /// * `AuthError::InvalidToken` - 서명 불일치, 다른 종류의 키로 서명됨, 형식 오류
    pub fn validate(&self, kind: TokenKind, token: &str) -> Result<TokenClaims, AuthError> {
        let claims = decode::<TokenClaims>(token, &self.keys(kind).decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })?;

        // jsonwebtoken은 exp == now를 유효로 보므로 경계를 직접 확인
        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }

    /// 설정된 TTL로 액세스/리프레시 토큰 쌍을 발급합니다.
    pub fn issue_pair(&self, user_id: &str, roles: &[Role]) -> Result<TokenPair, AuthError> {
        let access_token = self.issue(TokenKind::Access, user_id, roles, self.access_ttl)?;
        let refresh_token = self.issue(TokenKind::Refresh, user_id, roles, self.refresh_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl.num_seconds(),
        })
    }
}
