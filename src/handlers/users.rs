//! # User HTTP Handlers
//!
//! 인증된 사용자 본인 조회와 관리자용 사용자 조회를 제공합니다.
//! 두 엔드포인트 모두 라우트 단에서 [`AuthMiddleware`](crate::middlewares::AuthMiddleware)로 보호됩니다.

use actix_web::{HttpResponse, get, web};

use crate::domain::{ApiResponse, AuthenticatedUser};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 현재 로그인한 사용자의 프로필
///
/// # Endpoint
/// `GET /user/profile`
#[get("/profile")]
pub async fn get_profile(
    users: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let profile = users.get_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

/// ID로 사용자 조회 (관리자 전용)
///
/// # Endpoint
/// `GET /admin/users/{user_id}`
#[get("/users/{user_id}")]
pub async fn get_user(
    users: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = users.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
