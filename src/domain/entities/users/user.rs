//! User Entity Implementation
//!
//! 로그인과 세션 검증에 필요한 최소한의 사용자 모델입니다.
//! 생성 시점 이후 인증 코어는 이 엔티티를 수정하지 않습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::models::role::Role;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub name: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 사용자 역할 (표시 순서 유지)
    pub roles: Vec<Role>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 가입 경로로 만들어지는 사용자는 항상 `user` 역할 하나만 가집니다.
    pub fn new(email: String, name: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            password_hash,
            roles: vec![Role::User],
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
