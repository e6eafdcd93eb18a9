//! Rate Limit 미들웨어
//!
//! 피어 IP를 키로 [`RateLimiter`]에 허용 여부를 묻고, 거부되면 429 응답을 돌려줍니다.
//! 같은 `Arc<RateLimiter>`를 모든 워커가 공유하므로 한도는 프로세스 단위로 적용됩니다.
//!
//! ```rust,ignore
//! web::scope("/api/v1")
//!     .wrap(RateLimit::new(global_limiter.clone()))
//! ```

use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{Error, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::errors::AppError;
use crate::middlewares::rate_limiter::RateLimiter;

/// 피어 주소가 없을 때 사용하는 키
pub const UNKNOWN_CLIENT: &str = "unknown";

#[derive(Clone)]
pub struct RateLimit {
    limiter: Arc<RateLimiter>,
}

impl RateLimit {
    pub fn new(limiter: Arc<RateLimiter>) -> Self {
        Self { limiter }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitService {
            service: Rc::new(service),
            limiter: self.limiter.clone(),
        }))
    }
}

pub struct RateLimitService<S> {
    service: Rc<S>,
    limiter: Arc<RateLimiter>,
}

/// 요청의 클라이언트 키 (피어 IP)
fn client_key(req: &ServiceRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

impl<S, B> Service<ServiceRequest> for RateLimitService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let key = client_key(&req);

        if !self.limiter.allow(&key) {
            log::warn!("⏳ Rate limit 초과: {} {}", key, req.path());
            let response = AppError::TooManyRequests.error_response();
            let (req, _) = req.into_parts();
            let res = ServiceResponse::new(req, response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let service = self.service.clone();
        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
