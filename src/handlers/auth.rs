//! Authentication HTTP Handlers
//!
//! 가입, 로그인, 토큰 갱신, 로그아웃 엔드포인트입니다.
//! 실제 토큰 발급과 세션 기록은 모두 [`AuthService`]에 위임합니다.
//!
//! | 메서드 | 경로 | 인증 |
//! |--------|------|------|
//! | `POST` | `/auth/register` | 불필요 |
//! | `POST` | `/auth/login` | 불필요 |
//! | `POST` | `/auth/refresh` | 불필요 (리프레시 토큰) |
//! | `POST` | `/auth/logout` | Bearer |

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::{
    ApiResponse, AuthenticatedUser, BearerToken, LoginRequest, LogoutRequest,
    RefreshTokenRequest, RegisterRequest, RegisterResponse, TokenResponse, UserResponse,
};
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::AuthService;
use crate::services::users::UserService;

/// 회원가입 핸들러
///
/// 사용자를 만든 뒤 바로 로그인까지 수행하여 토큰 쌍을 함께 돌려줍니다.
///
/// # Endpoint
/// `POST /auth/register`
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    users: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let request = payload.into_inner();
    let password = request.password.clone();
    let user = users.register(request).await?;
    let token = auth.login(&password, &user).await?;

    log::info!("회원가입 완료: {}", user.email);

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(RegisterResponse {
            info: UserResponse::from(user),
            token,
        })
        .with_message("User registered successfully"),
    ))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = auth
        .login_with_email(&payload.email, &payload.password)
        .await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success(TokenResponse { token }).with_message("Login successful")))
}

/// 토큰 갱신 핸들러
///
/// 요청 본문의 리프레시 토큰은 한 번만 사용할 수 있습니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    auth: web::Data<AuthService>,
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let token = auth.refresh_token(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(TokenResponse { token }).with_message("Token refreshed successfully"),
    ))
}

/// 로그아웃 핸들러
///
/// 미들웨어가 검증한 액세스 토큰과 본문의 리프레시 토큰을 함께 폐기합니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout(
    auth: web::Data<AuthService>,
    user: AuthenticatedUser,
    access_token: BearerToken,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    auth.logout_as(&user.user_id, &access_token.0, &payload.refresh_token)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("Logged out successfully")))
}
