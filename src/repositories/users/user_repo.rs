//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션을 사용하며, 이메일에는 유니크 인덱스가 걸려 있습니다.
//! 모든 쿼리는 요청 데드라인(기본 5초) 안에서 실행됩니다.

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use super::{UserStore, normalize_email};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};
use crate::utils::with_deadline;

const COLLECTION: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
    request_timeout: Duration,
}

impl UserRepository {
    pub fn new(db: &Database, request_timeout: Duration) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION),
            request_timeout,
        }
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        with_deadline(self.request_timeout, async {
            self.collection.create_index(index).await?;
            Ok::<_, AppError>(())
        })
        .await?;

        info!("📇 users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        with_deadline(self.request_timeout, async {
            Ok::<_, AppError>(self.collection.find_one(doc! { "_id": object_id }).await?)
        })
        .await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = normalize_email(email);

        with_deadline(self.request_timeout, async {
            Ok::<_, AppError>(self.collection.find_one(doc! { "email": &email }).await?)
        })
        .await
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        user.email = normalize_email(&user.email);

        // 중복 이메일은 유니크 인덱스(email_unique)가 판정
        let result = with_deadline(self.request_timeout, async {
            self.collection.insert_one(&user).await.map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::BadRequest("Email already exists".to_string())
                } else {
                    AppError::from(e)
                }
            })
        })
        .await?;

        user.id = result.inserted_id.as_object_id();
        if user.id.is_none() {
            return Err(AppError::DatabaseError(
                "insert did not return an ObjectId".to_string(),
            ));
        }

        info!("👤 사용자 생성: {}", user.email);
        Ok(user)
    }
}
