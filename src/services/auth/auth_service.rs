//! 인증/세션 서비스
//!
//! 토큰 발급, 갱신, 폐기, 세션 검증을 세션 스토어 위에서 조율합니다.
//!
//! ## 토큰 쌍의 상태
//!
//! ```text
//! issued-active ──logout / refresh──▶ revoked (종단)
//!       │
//!       └──────────TTL 경과──────────▶ expired (종단)
//! ```
//!
//! 상태는 열거형으로 저장되지 않고 스토어의 두 키 공간에서 유도됩니다.
//!
//! | 키 | 값 | TTL |
//! |----|----|-----|
//! | `<access_token>` | user_id | `SESSION_TTL` (24h) |
//! | `blacklist:<access_token>` | `"true"` | `ACCESS_BLACKLIST_TTL` (24h) |
//! | `blacklist:<refresh_token>` | `"true"` | 토큰의 남은 수명 + 1분, 최소 `REFRESH_BLACKLIST_TTL` (48h) |
//!
//! 리프레시 토큰의 블랙리스트 항목은 토큰 자체보다 먼저 사라지면 안 됩니다.
//! 먼저 사라지면 소비된 토큰이 다시 서명 검증을 통과해 재사용됩니다.
//!
//! 액세스 토큰은 서명이 유효하고, 만료되지 않았고, 블랙리스트에 없고,
//! 활성 세션 인덱스에 있을 때만 사용할 수 있습니다.
//!
//! 스토어와 사용자 저장소 호출은 모두 요청 데드라인 안에서 실행되며,
//! 데드라인 초과는 `AuthError::Timeout`(일시적 장애)으로 보고됩니다.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, info, warn};

use crate::caching::{BLACKLIST_MARKER, SessionStore, StoreBatch, blacklist_key};
use crate::config::SessionConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{TokenClaims, TokenKind, TokenPair};
use crate::errors::AuthError;
use crate::repositories::UserStore;
use crate::services::auth::token_codec::TokenCodec;
use crate::utils::with_deadline;

/// 블랙리스트 항목이 토큰 만료 시각보다 더 유지되는 여유분 (초)
const REVOCATION_MARGIN_SECS: i64 = 60;

pub struct AuthService {
    codec: Arc<TokenCodec>,
    store: Arc<dyn SessionStore>,
    users: Arc<dyn UserStore>,
    session: SessionConfig,
}

impl AuthService {
    pub fn new(
        codec: Arc<TokenCodec>,
        store: Arc<dyn SessionStore>,
        users: Arc<dyn UserStore>,
        session: SessionConfig,
    ) -> Self {
        Self {
            codec,
            store,
            users,
            session,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// 저장된 사용자에 대해 비밀번호를 검증하고 토큰 쌍을 발급합니다.
    ///
    /// 새 액세스 토큰은 활성 세션 인덱스에 기록됩니다. 블랙리스트는 건드리지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - 비밀번호 불일치
    /// * `AuthError::Store` / `AuthError::Timeout` - 세션 기록 실패
    pub async fn login(&self, password: &str, user: &User) -> Result<TokenPair, AuthError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AuthError::Lookup("stored user has no id".to_string()))?;

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash).unwrap_or_else(|e| {
            warn!("비밀번호 해시 검증 불가 (user_id={}): {}", user_id, e);
            false
        });
        debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            warn!("🚫 로그인 실패: 비밀번호 불일치 (user_id={})", user_id);
            return Err(AuthError::InvalidCredentials);
        }

        let pair = self.codec.issue_pair(&user_id, &user.roles)?;
        self.activate(&pair.access_token, &user_id).await?;

        info!("🔑 로그인 성공: user_id={}", user_id);
        Ok(pair)
    }

    /// 이메일로 사용자를 찾아 로그인합니다.
    ///
    /// 존재하지 않는 이메일도 `InvalidCredentials`로 보고해 계정 존재 여부를 숨깁니다.
    pub async fn login_with_email(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, AuthError> {
        let user = with_deadline(self.session.request_timeout, async {
            Ok::<_, AuthError>(self.users.find_by_email(email).await?)
        })
        .await?;

        match user {
            Some(user) => self.login(password, &user).await,
            None => {
                warn!("🚫 로그인 실패: 등록되지 않은 이메일");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// 리프레시 토큰을 소비하고 새 토큰 쌍을 발급합니다.
    ///
    /// 소비된 리프레시 토큰은 `SET NX`로 블랙리스트에 기록됩니다. 같은 토큰으로
    /// 동시에 들어온 갱신 요청 중 이 쓰기에 성공한 하나만 새 토큰 쌍을 받습니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidToken` / `AuthError::TokenExpired` - 코덱 검증 실패
    /// * `AuthError::TokenRevoked` - 이미 사용되었거나 로그아웃된 토큰
    /// * `AuthError::UserNotFound` - 클레임의 사용자가 삭제됨
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.codec.validate(TokenKind::Refresh, refresh_token)?;
        let revoked_key = blacklist_key(refresh_token);

        if self.store_get(&revoked_key).await?.is_some() {
            warn!("🚫 폐기된 리프레시 토큰 재사용 시도: user_id={}", claims.user_id);
            return Err(AuthError::TokenRevoked);
        }

        let user = self.find_user(&claims.user_id).await?;

        let claimed = with_deadline(
            self.session.request_timeout,
            self.store.set_if_absent(
                &revoked_key,
                BLACKLIST_MARKER,
                self.refresh_revocation_ttl(Some(&claims)),
            ),
        )
        .await?;
        if !claimed {
            warn!("🚫 동시 갱신 경합에서 패배: user_id={}", claims.user_id);
            return Err(AuthError::TokenRevoked);
        }

        // 여기부터 실패하면 기존 리프레시 토큰은 이미 소비된 상태 (재로그인 필요)
        let pair = self.codec.issue_pair(&claims.user_id, &user.roles)?;
        self.activate(&pair.access_token, &claims.user_id).await?;

        info!("🔄 토큰 갱신: user_id={}", claims.user_id);
        Ok(pair)
    }

    /// 액세스 토큰이 블랙리스트에 없고 활성 세션 인덱스에 있는지 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenRevoked` - 블랙리스트에 있음
    /// * `AuthError::TokenNotActive` - 발급된 적 없거나 이미 로그아웃됨
    pub async fn validate_session(&self, access_token: &str) -> Result<(), AuthError> {
        if self.store_get(&blacklist_key(access_token)).await?.is_some() {
            return Err(AuthError::TokenRevoked);
        }
        if self.store_get(access_token).await?.is_none() {
            return Err(AuthError::TokenNotActive);
        }
        Ok(())
    }

    /// 보호된 요청 한 건을 인증합니다.
    ///
    /// 서명/만료 확인, 세션 확인, 사용자 조회를 순서대로 수행합니다.
    /// 삭제된 사용자는 토큰이 남아 있어도 즉시 거부됩니다.
    pub async fn authenticate(&self, access_token: &str) -> Result<(TokenClaims, User), AuthError> {
        let claims = self.codec.validate(TokenKind::Access, access_token)?;
        self.validate_session(access_token).await?;
        let user = self.find_user(&claims.user_id).await?;
        Ok((claims, user))
    }

    /// 두 토큰을 블랙리스트에 올리고 활성 세션에서 제거합니다.
    ///
    /// 세 개의 쓰기는 하나의 배치로 전송되며, 실패하면 아무것도 적용되지 않은 것으로
    /// 보고됩니다. 클라이언트는 로그아웃 전체를 재시도해야 합니다.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> Result<(), AuthError> {
        let claims = self.codec.validate(TokenKind::Refresh, refresh_token).ok();
        self.revoke_pair(access_token, refresh_token, claims.as_ref())
            .await
    }

    /// 인증된 사용자 본인의 리프레시 토큰인지 확인한 뒤 로그아웃합니다.
    ///
    /// 리프레시 토큰이 이미 만료되어 디코딩되지 않더라도 블랙리스트에는 기록합니다.
    /// 디코딩된 토큰이 다른 사용자 것이면 `InvalidToken`입니다.
    pub async fn logout_as(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), AuthError> {
        let claims = self.codec.validate(TokenKind::Refresh, refresh_token).ok();
        if let Some(claims) = &claims {
            if claims.user_id != user_id {
                warn!("🚫 다른 사용자의 리프레시 토큰으로 로그아웃 시도: user_id={}", user_id);
                return Err(AuthError::InvalidToken);
            }
        }

        self.revoke_pair(access_token, refresh_token, claims.as_ref())
            .await?;
        info!("👋 로그아웃: user_id={}", user_id);
        Ok(())
    }

    async fn revoke_pair(
        &self,
        access_token: &str,
        refresh_token: &str,
        refresh_claims: Option<&TokenClaims>,
    ) -> Result<(), AuthError> {
        let batch = StoreBatch::new()
            .set(
                blacklist_key(access_token),
                BLACKLIST_MARKER,
                self.session.access_blacklist_ttl,
            )
            .set(
                blacklist_key(refresh_token),
                BLACKLIST_MARKER,
                self.refresh_revocation_ttl(refresh_claims),
            )
            .delete(access_token);

        with_deadline(self.session.request_timeout, self.store.exec(batch))
            .await
            .inspect_err(|e| log::error!("❌ 로그아웃 배치 실패: {}", e))?;
        Ok(())
    }

    /// 리프레시 토큰 블랙리스트 TTL
    ///
    /// 토큰의 남은 수명에 여유분을 더한 값과 `refresh_blacklist_ttl` 중 큰 쪽입니다.
    /// 디코딩되지 않는 토큰은 발급 TTL 전체가 남았다고 봅니다.
    fn refresh_revocation_ttl(&self, claims: Option<&TokenClaims>) -> Duration {
        let remaining = match claims {
            Some(claims) => chrono::Duration::seconds(claims.exp - Utc::now().timestamp()),
            None => self.codec.ttl(TokenKind::Refresh),
        };
        let until_expiry = (remaining + chrono::Duration::seconds(REVOCATION_MARGIN_SECS))
            .to_std()
            .unwrap_or_default();

        until_expiry.max(self.session.refresh_blacklist_ttl)
    }

    async fn activate(&self, access_token: &str, user_id: &str) -> Result<(), AuthError> {
        with_deadline(
            self.session.request_timeout,
            self.store.set(access_token, user_id, self.session.session_ttl),
        )
        .await?;
        Ok(())
    }

    async fn store_get(&self, key: &str) -> Result<Option<String>, AuthError> {
        let value = with_deadline(self.session.request_timeout, self.store.get(key)).await?;
        Ok(value)
    }

    async fn find_user(&self, user_id: &str) -> Result<User, AuthError> {
        let user = with_deadline(self.session.request_timeout, async {
            Ok::<_, AuthError>(self.users.find_by_id(user_id).await?)
        })
        .await?;

        user.ok_or_else(|| {
            warn!("🚫 토큰의 사용자를 찾을 수 없음: user_id={}", user_id);
            AuthError::UserNotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::caching::MemorySessionStore;
    use crate::config::JwtConfig;
    use crate::domain::models::role::Role;
    use crate::errors::StoreError;
    use crate::repositories::InMemoryUserStore;

    const PASSWORD: &str = "Secret#1";

    struct Fixture {
        service: Arc<AuthService>,
        store: Arc<MemorySessionStore>,
        users: Arc<InMemoryUserStore>,
        user: User,
    }

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            access_secret: "access-secret".into(),
            refresh_secret: "refresh-secret".into(),
            access_ttl: chrono::Duration::hours(24),
            refresh_ttl: chrono::Duration::hours(168),
        }
    }

    async fn fixture() -> Fixture {
        fixture_with(SessionConfig::default()).await
    }

    async fn fixture_with(session: SessionConfig) -> Fixture {
        let store = Arc::new(MemorySessionStore::new());
        let users = Arc::new(InMemoryUserStore::new());
        let hash = bcrypt::hash(PASSWORD, 4).unwrap();
        let user = users
            .create(User::new("u1@example.com".into(), "User One".into(), hash))
            .await
            .unwrap();

        let service = Arc::new(AuthService::new(
            Arc::new(TokenCodec::new(&jwt_config())),
            store.clone(),
            users.clone(),
            session,
        ));

        Fixture {
            service,
            store,
            users,
            user,
        }
    }

    #[tokio::test]
    async fn test_login_records_active_session() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(
            f.store.get(&pair.access_token).await.unwrap(),
            f.user.id_string()
        );
        f.service.validate_session(&pair.access_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let f = fixture().await;
        let result = f.service.login("Wrong#123", &f.user).await;

        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
        assert!(f.store.is_empty());
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_hides_existence() {
        let f = fixture().await;
        let result = f.service.login_with_email("nobody@example.com", PASSWORD).await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);

        let pair = f.service.login_with_email("U1@example.com", PASSWORD).await.unwrap();
        f.service.validate_session(&pair.access_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_refresh_is_single_use() {
        let f = fixture().await;
        let original = f.service.login(PASSWORD, &f.user).await.unwrap();

        let renewed = f.service.refresh_token(&original.refresh_token).await.unwrap();
        assert_ne!(renewed.access_token, original.access_token);
        assert_ne!(renewed.refresh_token, original.refresh_token);
        f.service.validate_session(&renewed.access_token).await.unwrap();

        let replay = f.service.refresh_token(&original.refresh_token).await;
        assert_eq!(replay.unwrap_err(), AuthError::TokenRevoked);

        // 새로 받은 리프레시 토큰은 여전히 사용 가능
        f.service.refresh_token(&renewed.refresh_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_refresh_has_exactly_one_winner() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        let attempts: Vec<_> = (0..16)
            .map(|_| {
                let service = f.service.clone();
                let token = pair.refresh_token.clone();
                tokio::spawn(async move { service.refresh_token(&token).await })
            })
            .collect();

        let mut successes = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => successes += 1,
                Err(e) => assert_eq!(e, AuthError::TokenRevoked),
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_refresh_rejects_access_token_and_garbage() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        assert_eq!(
            f.service.refresh_token(&pair.access_token).await.unwrap_err(),
            AuthError::InvalidToken
        );
        assert_eq!(
            f.service.refresh_token("garbage").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn test_refresh_for_deleted_user() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();
        f.users.remove(&f.user.id_string().unwrap());

        assert_eq!(
            f.service.refresh_token(&pair.refresh_token).await.unwrap_err(),
            AuthError::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_logout_revokes_both_tokens() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        f.service
            .logout(&pair.access_token, &pair.refresh_token)
            .await
            .unwrap();

        let session = f.service.validate_session(&pair.access_token).await;
        assert_eq!(session.unwrap_err(), AuthError::TokenRevoked);
        assert_eq!(
            f.service.refresh_token(&pair.refresh_token).await.unwrap_err(),
            AuthError::TokenRevoked
        );
        assert_eq!(f.store.get(&pair.access_token).await.unwrap(), None);
    }

    fn short_refresh_blacklist() -> SessionConfig {
        SessionConfig {
            refresh_blacklist_ttl: Duration::from_millis(300),
            ..SessionConfig::default()
        }
    }

    #[tokio::test]
    async fn test_consumed_refresh_token_outlives_configured_blacklist_ttl() {
        let f = fixture_with(short_refresh_blacklist()).await;
        let original = f.service.login(PASSWORD, &f.user).await.unwrap();

        f.service.refresh_token(&original.refresh_token).await.unwrap();
        assert_eq!(
            f.service.refresh_token(&original.refresh_token).await.unwrap_err(),
            AuthError::TokenRevoked
        );

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(
            f.service.refresh_token(&original.refresh_token).await.unwrap_err(),
            AuthError::TokenRevoked
        );
    }

    #[tokio::test]
    async fn test_logged_out_refresh_token_outlives_configured_blacklist_ttl() {
        let f = fixture_with(short_refresh_blacklist()).await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();
        let user_id = f.user.id_string().unwrap();

        f.service
            .logout_as(&user_id, &pair.access_token, &pair.refresh_token)
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(
            f.service.refresh_token(&pair.refresh_token).await.unwrap_err(),
            AuthError::TokenRevoked
        );
    }

    #[tokio::test]
    async fn test_refresh_revocation_ttl_covers_token_lifetime() {
        let f = fixture_with(short_refresh_blacklist()).await;
        let week = Duration::from_secs(168 * 3600);

        let token = f
            .service
            .codec()
            .issue(TokenKind::Refresh, "u1", &[Role::User], chrono::Duration::hours(168))
            .unwrap();
        let claims = f.service.codec().validate(TokenKind::Refresh, &token).unwrap();
        let ttl = f.service.refresh_revocation_ttl(Some(&claims));
        assert!(ttl >= week - Duration::from_secs(5));
        assert!(ttl <= week + Duration::from_secs(REVOCATION_MARGIN_SECS as u64));

        // 디코딩 불가 토큰은 발급 TTL 전체
        assert!(f.service.refresh_revocation_ttl(None) >= week);

        // 이미 지난 만료 시각이면 설정값이 하한
        let stale = TokenClaims {
            exp: Utc::now().timestamp() - 3600,
            ..claims
        };
        assert_eq!(
            f.service.refresh_revocation_ttl(Some(&stale)),
            Duration::from_millis(300)
        );
    }

    #[tokio::test]
    async fn test_validate_session_for_unknown_token() {
        let f = fixture().await;
        let stray = f
            .service
            .codec()
            .issue(TokenKind::Access, "u1", &[Role::User], chrono::Duration::hours(1))
            .unwrap();

        assert_eq!(
            f.service.validate_session(&stray).await.unwrap_err(),
            AuthError::TokenNotActive
        );
    }

    #[tokio::test]
    async fn test_authenticate_rejects_deleted_user() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        let (claims, user) = f.service.authenticate(&pair.access_token).await.unwrap();
        assert_eq!(Some(claims.user_id), user.id_string());

        f.users.remove(&f.user.id_string().unwrap());
        assert_eq!(
            f.service.authenticate(&pair.access_token).await.unwrap_err(),
            AuthError::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_logout_as_rejects_foreign_refresh_token() {
        let f = fixture().await;
        let pair = f.service.login(PASSWORD, &f.user).await.unwrap();

        let result = f
            .service
            .logout_as("someone-else", &pair.access_token, &pair.refresh_token)
            .await;
        assert_eq!(result.unwrap_err(), AuthError::InvalidToken);
        f.service.validate_session(&pair.access_token).await.unwrap();
    }

    /// 배치 실행만 실패하는 스토어
    struct BrokenBatchStore(MemorySessionStore);

    #[async_trait]
    impl SessionStore for BrokenBatchStore {
        async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
            self.0.set(key, value, ttl).await
        }
        async fn set_if_absent(
            &self,
            key: &str,
            value: &str,
            ttl: Duration,
        ) -> Result<bool, StoreError> {
            self.0.set_if_absent(key, value, ttl).await
        }
        async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key).await
        }
        async fn delete(&self, keys: &[String]) -> Result<(), StoreError> {
            self.0.delete(keys).await
        }
        async fn exec(&self, _batch: StoreBatch) -> Result<(), StoreError> {
            Err(StoreError::Connection("connection reset".into()))
        }
        async fn ping(&self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_logout_failure_is_reported_and_session_survives() {
        let users = Arc::new(InMemoryUserStore::new());
        let hash = bcrypt::hash(PASSWORD, 4).unwrap();
        let user = users
            .create(User::new("u2@example.com".into(), "User Two".into(), hash))
            .await
            .unwrap();
        let service = AuthService::new(
            Arc::new(TokenCodec::new(&jwt_config())),
            Arc::new(BrokenBatchStore(MemorySessionStore::new())),
            users,
            SessionConfig::default(),
        );

        let pair = service.login(PASSWORD, &user).await.unwrap();
        let result = service.logout(&pair.access_token, &pair.refresh_token).await;

        assert!(matches!(result, Err(AuthError::Store(StoreError::Connection(_)))));
        service.validate_session(&pair.access_token).await.unwrap();
    }

    /// 모든 호출이 멈추는 스토어
    struct StalledStore;

    #[async_trait]
    impl SessionStore for StalledStore {
        async fn set(&self, _: &str, _: &str, _: Duration) -> Result<(), StoreError> {
            std::future::pending().await
        }
        async fn set_if_absent(&self, _: &str, _: &str, _: Duration) -> Result<bool, StoreError> {
            std::future::pending().await
        }
        async fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
            std::future::pending().await
        }
        async fn delete(&self, _: &[String]) -> Result<(), StoreError> {
            std::future::pending().await
        }
        async fn exec(&self, _: StoreBatch) -> Result<(), StoreError> {
            std::future::pending().await
        }
        async fn ping(&self) -> Result<(), StoreError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_stalled_store_times_out() {
        let session = SessionConfig {
            request_timeout: Duration::from_millis(20),
            ..SessionConfig::default()
        };
        let codec = Arc::new(TokenCodec::new(&jwt_config()));
        let service = AuthService::new(
            codec.clone(),
            Arc::new(StalledStore),
            Arc::new(InMemoryUserStore::new()),
            session,
        );
        let token = codec
            .issue(TokenKind::Access, "u1", &[Role::User], chrono::Duration::hours(1))
            .unwrap();

        let result = service.validate_session(&token).await;
        assert_eq!(result.unwrap_err(), AuthError::Timeout);
    }

    /// 저장소 자체 데드라인이 먼저 만료된 사용자 저장소
    struct TimedOutUserStore;

    #[async_trait]
    impl UserStore for TimedOutUserStore {
        async fn find_by_id(&self, _: &str) -> crate::errors::AppResult<Option<User>> {
            Err(crate::errors::AppError::Timeout)
        }
        async fn find_by_email(&self, _: &str) -> crate::errors::AppResult<Option<User>> {
            Err(crate::errors::AppError::Timeout)
        }
        async fn create(&self, _: User) -> crate::errors::AppResult<User> {
            Err(crate::errors::AppError::Timeout)
        }
    }

    #[tokio::test]
    async fn test_user_lookup_timeout_is_reported_as_timeout() {
        let codec = Arc::new(TokenCodec::new(&jwt_config()));
        let store = Arc::new(MemorySessionStore::new());
        let service = AuthService::new(
            codec.clone(),
            store.clone(),
            Arc::new(TimedOutUserStore),
            SessionConfig::default(),
        );

        assert_eq!(
            service.login_with_email("u1@example.com", PASSWORD).await.unwrap_err(),
            AuthError::Timeout
        );

        let token = codec
            .issue(TokenKind::Access, "u1", &[Role::User], chrono::Duration::hours(1))
            .unwrap();
        store.set(&token, "u1", Duration::from_secs(60)).await.unwrap();
        assert_eq!(service.authenticate(&token).await.unwrap_err(), AuthError::Timeout);
    }
}
