//! # 회원 가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! - `name`: 3-30자
//! - `email`: 이메일 형식 (중복 여부는 서비스 계층에서 확인)
//! - `password`: 최소 6자, 대문자/소문자/숫자/특수문자 각각 1개 이상
//! - `confirm_password`: `password`와 정확히 일치
//!
//! 역할(`roles`)은 요청으로 받지 않습니다. 가입한 사용자는 항상 `user` 역할로 시작합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 회원 가입 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "password": "Secret#1",
///   "confirm_password": "Secret#1"
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_passwords_match"))]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30, message = "name must be between 3 and 30 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    pub confirm_password: String,
}

fn validate_passwords_match(req: &RegisterRequest) -> Result<(), ValidationError> {
    if req.password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("confirm_password must be equal to password".into()));
    }
    Ok(())
}

/// 대문자, 소문자, 숫자, 특수문자를 각각 하나 이상 포함해야 합니다.
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| c.is_ascii_punctuation());

    if !(has_uppercase && has_lowercase && has_digit && has_special) {
        return Err(ValidationError::new("weak_password").with_message(
            "Password must contain at least one uppercase letter, one number, and one special character"
                .into(),
        ));
    }
    Ok(())
}
