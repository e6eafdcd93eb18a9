//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::models::auth::{AuthenticatedUser, BearerToken, RequiredRoles};
use crate::domain::models::token::TokenClaims;
use crate::errors::{AppError, AuthError};
use crate::services::auth::AuthService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_roles: Option<RequiredRoles>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            let (user, claims, token) = match authenticate_request(&req).await {
                Ok(identity) => identity,
                Err(err) => return Ok(reject(req, err)),
            };

            // 역할 검증
            if let Some(required) = required_roles.as_ref() {
                if !user.has_any_role(required.roles()) {
                    log::warn!(
                        "권한 부족: 사용자 ID {} ({:?}), 필요 권한: {:?}",
                        user.user_id,
                        user.roles,
                        required.roles()
                    );
                    return Ok(reject(req, AuthError::Forbidden.into()));
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            {
                let mut extensions = req.extensions_mut();
                extensions.insert(user);
                extensions.insert(claims);
                extensions.insert(token);
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn reject<B>(req: ServiceRequest, err: AppError) -> ServiceResponse<EitherBody<B>> {
    let response = err.error_response();
    let (req, _) = req.into_parts();
    ServiceResponse::new(req, response).map_into_right_body()
}

/// `Authorization` 헤더 값에서 토큰을 꺼냅니다.
///
/// 공백 하나로 나뉜 정확히 두 부분이어야 하고, 첫 부분은 `Bearer`여야 합니다.
pub(crate) fn parse_bearer(header: Option<&str>) -> Result<&str, AppError> {
    let header = header
        .ok_or_else(|| AppError::Unauthorized("Authorization header is required".to_string()))?;

    let parts: Vec<&str> = header.split(' ').collect();
    match parts.as_slice() {
        ["Bearer", token] if !token.is_empty() => Ok(*token),
        _ => Err(AppError::Unauthorized("Invalid token format".to_string())),
    }
}

/// 요청에서 JWT 토큰을 추출하고 세션까지 검증
async fn authenticate_request(
    req: &ServiceRequest,
) -> Result<(AuthenticatedUser, TokenClaims, BearerToken), AppError> {
    let header = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());
    let token = parse_bearer(header)?.to_string();

    let auth = req
        .app_data::<web::Data<AuthService>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AuthService is not registered".to_string()))?;

    match auth.authenticate(&token).await {
        Ok((claims, user)) => {
            let identity = AuthenticatedUser {
                user_id: claims.user_id.clone(),
                email: user.email,
                roles: user.roles,
            };
            Ok((identity, claims, BearerToken(token)))
        }
        Err(err) => {
            if err.is_token_error() || err == AuthError::UserNotFound {
                log::warn!("🚫 인증 실패: {}", err);
            }
            Err(err.into())
        }
    }
}
