use std::future::{Ready, ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::role::Role;
use crate::errors::AppError;

/// 인증 미들웨어가 요청 컨텍스트에 붙이는 사용자 정보
///
/// 토큰 검증과 세션 확인, 사용자 조회까지 통과한 경우에만 생성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 이메일
    pub email: String,

    /// 사용자 역할 목록
    pub roles: Vec<Role>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::Unauthorized(
                "Authorization header is required".to_string(),
            )
            .into())),
        }
    }
}

/// 미들웨어가 검증한 원본 액세스 토큰
///
/// 로그아웃처럼 토큰 문자열 자체가 필요한 핸들러에서 사용합니다.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<BearerToken>() {
            Some(token) => ready(Ok(token.clone())),
            None => ready(Err(AppError::Unauthorized(
                "Authorization header is required".to_string(),
            )
            .into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn member() -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "u1".into(),
            email: "u1@example.com".into(),
            roles: vec![Role::User],
        }
    }

    #[test]
    fn test_role_helpers() {
        let user = member();
        assert!(user.has_role(&Role::User));
        assert!(!user.has_role(&Role::Admin));
        assert!(user.has_any_role(&[Role::Admin, Role::User]));
        assert!(!user.has_any_role(&[Role::Admin, Role::Custom("auditor".into())]));
        assert!(!user.has_any_role(&[]));
    }

    #[actix_web::test]
    async fn test_extractor_reads_request_extensions() {
        let req = TestRequest::default().to_http_request();
        assert!(AuthenticatedUser::extract(&req).await.is_err());

        req.extensions_mut().insert(member());
        let user = AuthenticatedUser::extract(&req).await.unwrap();
        assert_eq!(user.user_id, "u1");
    }
}
