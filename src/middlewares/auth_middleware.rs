//! JWT 인증 미들웨어
//!
//! 보호된 핸들러 앞에서 요청마다 다음을 순서대로 확인합니다.
//!
//! 1. `Authorization` 헤더 존재 → 없으면 401 `"Authorization header is required"`
//! 2. 정확히 `"Bearer <token>"` 두 부분 → 아니면 401 `"Invalid token format"`
//! 3. 액세스 토큰 서명/만료 → 실패 시 401 `"Invalid token"`
//! 4. 블랙리스트 부재 + 활성 세션 존재 → 실패 시 401 `"Invalid token"`
//! 5. 클레임의 사용자 조회 → 없으면 401 `"Invalid token"`
//! 6. 역할 요구사항 → 불충분하면 403 `"Insufficient permissions"`
//!
//! 통과하면 [`AuthenticatedUser`](crate::domain::models::AuthenticatedUser),
//! [`TokenClaims`](crate::domain::models::TokenClaims),
//! [`BearerToken`](crate::domain::models::BearerToken)이 요청 Extensions에 들어갑니다.
//!
//! ```rust,ignore
//! web::scope("/admin").wrap(AuthMiddleware::required_with_role(Role::Admin))
//! ```

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::models::auth::RequiredRoles;
use crate::domain::models::role::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
#[derive(Debug, Clone, Default)]
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_roles: Option<RequiredRoles>,
}

impl AuthMiddleware {
    /// 인증만 요구하는 미들웨어
    pub fn required() -> Self {
        Self::default()
    }

    /// 특정 역할 요구 인증 미들웨어 생성
    pub fn required_with_role(role: Role) -> Self {
        Self {
            required_roles: Some(RequiredRoles::single(role)),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}
