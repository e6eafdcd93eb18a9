use serde::Deserialize;
use validator::Validate;

/// 토큰 갱신 요청 DTO
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

/// 로그아웃 요청 DTO
///
/// 액세스 토큰은 `Authorization` 헤더에서, 리프레시 토큰은 본문에서 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct LogoutRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}
