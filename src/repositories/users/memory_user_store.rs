use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::{UserStore, normalize_email};
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

/// 인메모리 사용자 저장소 (테스트 및 로컬 개발용)
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자를 삭제합니다. 삭제된 사용자의 토큰은 즉시 무효가 됩니다.
    pub fn remove(&self, id: &str) -> Option<User> {
        self.users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(id)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);
        let users = self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);

        let mut users = self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.insert(id.to_hex(), user.clone());
        Ok(user)
    }
}
