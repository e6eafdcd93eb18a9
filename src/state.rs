//! 애플리케이션 상태
//!
//! 시작 시 한 번 조립되어 모든 워커에 공유되는 의존성 묶음입니다.
//! 전역 싱글톤 대신 이 구조체를 통해 각 컴포넌트에 명시적으로 주입합니다.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::caching::SessionStore;
use crate::config::AppConfig;
use crate::middlewares::RateLimiter;
use crate::repositories::UserStore;
use crate::services::auth::{AuthService, TokenCodec};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    /// `/api/v1` 전체에 적용
    pub global_limiter: Arc<RateLimiter>,
    /// `/api/v1/auth`에 추가 적용
    pub auth_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn SessionStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        let codec = Arc::new(TokenCodec::new(&config.jwt));
        let auth = Arc::new(AuthService::new(
            codec,
            store,
            user_store.clone(),
            config.session.clone(),
        ));
        let users = Arc::new(UserService::new(user_store, config.password.bcrypt_cost));

        Self {
            global_limiter: Arc::new(RateLimiter::from_settings(&config.rate_limit.global)),
            auth_limiter: Arc::new(RateLimiter::from_settings(&config.rate_limit.auth)),
            config: Arc::new(config),
            auth,
            users,
        }
    }

    /// Rate limiter 정리 작업을 시작합니다. 런타임 안에서 호출해야 합니다.
    pub fn spawn_background_tasks(&self) -> Vec<JoinHandle<()>> {
        let every = self.config.rate_limit.sweep_interval;
        vec![
            self.global_limiter.spawn_sweeper(every),
            self.auth_limiter.spawn_sweeper(every),
        ]
    }
}
