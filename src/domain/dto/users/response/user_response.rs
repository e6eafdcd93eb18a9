use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;
use crate::domain::models::role::Role;
use crate::domain::models::token::TokenPair;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            name,
            roles,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            email,
            name,
            roles,
            created_at,
            updated_at,
        }
    }
}

/// 가입 응답 DTO (`{info, token}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub info: UserResponse,
    pub token: TokenPair,
}

/// 로그인/갱신 응답 DTO (`{token}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: TokenPair,
}
