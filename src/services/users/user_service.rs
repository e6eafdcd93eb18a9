//! # 사용자 관리 서비스
//!
//! 가입(비밀번호 해싱 포함)과 사용자 조회를 담당합니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │         UserService          │
//! │ • 중복 이메일 확인             │
//! │ • bcrypt 해싱 (환경별 cost)    │
//! │ • Entity → DTO 변환           │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │      dyn UserStore           │
//! │ • MongoDB / InMemory         │
//! └──────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;

use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::UserStore;

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 로컬 사용자를 등록합니다.
    ///
    /// 요청은 이미 `validator`로 검증된 상태여야 합니다. 역할은 요청과 무관하게
    /// 항상 `user` 하나로 시작합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 이미 사용 중인 이메일
    /// * `AppError::InternalError` - 해싱 실패
    /// * `AppError::DatabaseError` - 저장 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let start_time = Instant::now();

        // 해싱 비용을 아끼기 위한 사전 확인. 동시 가입 경합은 저장소의 유니크 제약이 막음
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let hash_start = Instant::now();
        let password_hash =
            hash(&request.password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.email, request.name.trim().to_string(), password_hash);
        let created = self.users.create(user).await?;

        log::info!("Total user registration took: {:?}", start_time.elapsed());
        Ok(created)
    }

    /// ID로 사용자를 조회하여 DTO로 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        self.users
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
