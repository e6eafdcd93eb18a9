//! 사용자 저장소
//!
//! 인증 코어는 [`UserStore`] trait을 통해서만 사용자를 조회합니다.

pub mod memory_user_store;
pub mod user_repo;

use async_trait::async_trait;

use crate::domain::entities::users::user::User;
use crate::errors::AppResult;

pub use memory_user_store::InMemoryUserStore;
pub use user_repo::UserRepository;

/// 사용자 조회/생성 협력자
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자를 조회합니다. 형식이 잘못된 ID는 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 이미 사용 중인 이메일
    async fn create(&self, user: User) -> AppResult<User>;
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
