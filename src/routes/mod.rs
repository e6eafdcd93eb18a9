//! API 라우트 설정 모듈
//!
//! ```text
//! /health                         공개
//! /api/v1                         전역 Rate Limit
//! ├── /auth                       인증 Rate Limit 추가
//! │   ├── POST /register
//! │   ├── POST /login
//! │   ├── POST /refresh
//! │   └── POST /logout            Bearer
//! ├── /user                       Bearer
//! │   └── GET  /profile
//! └── /admin                      Bearer + admin
//!     └── GET  /users/{user_id}
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! HttpServer::new(move || App::new().configure(routes::configure(state.clone())))
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::domain::Role;
use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::{AuthMiddleware, RateLimit};
use crate::state::AppState;

/// 공유 상태를 주입하고 모든 라우트를 등록하는 설정 함수를 만듭니다.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::from(state.auth.clone()))
            .app_data(web::Data::from(state.users.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::BadRequest(format!("Invalid request body: {}", err)).into()
            }));

        cfg.service(health_check);
        cfg.service(
            web::scope("/api/v1")
                .wrap(RateLimit::new(state.global_limiter.clone()))
                .service(
                    web::scope("/auth")
                        .wrap(RateLimit::new(state.auth_limiter.clone()))
                        .service(handlers::auth::register)
                        .service(handlers::auth::login)
                        .service(handlers::auth::refresh)
                        .service(handlers::auth::logout),
                )
                .service(
                    web::scope("/user")
                        .wrap(AuthMiddleware::required())
                        .service(handlers::users::get_profile),
                )
                .service(
                    web::scope("/admin")
                        .wrap(AuthMiddleware::required_with_role(Role::Admin))
                        .service(handlers::users::get_user),
                ),
        );
    }
}

/// 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "session_gate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::Value;

    use crate::state::test_support::{PASSWORD, TestHarness, test_config};

    async fn body<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
        test::read_body_json(resp).await
    }

    fn bearer(token: &str) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", token))
    }

    /// 로그인하여 `data.token`을 돌려받습니다.
    macro_rules! login {
        ($app:expr, $email:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({"email": $email, "password": PASSWORD}))
                .to_request();
            let resp = test::call_service($app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            body(resp).await["data"]["token"].clone()
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let harness = TestHarness::new();
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body(resp).await["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_register_login_profile_logout_flow() {
        let harness = TestHarness::new();
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "password": PASSWORD,
                "confirm_password": PASSWORD,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let registered = body(resp).await;
        assert_eq!(registered["data"]["info"]["email"], "jane@example.com");
        assert_eq!(registered["data"]["info"]["roles"], json!(["user"]));
        assert!(registered["data"]["info"].get("password_hash").is_none());
        assert!(registered["data"]["token"]["access_token"].is_string());

        let token = login!(&app, "jane@example.com");
        let access = token["access_token"].as_str().unwrap().to_string();
        let refresh = token["refresh_token"].as_str().unwrap().to_string();
        assert!(!access.is_empty());
        assert!(!refresh.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/v1/user/profile")
            .insert_header(bearer(&access))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body(resp).await["data"]["name"], "Jane Doe");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .insert_header(bearer(&access))
            .set_json(json!({"refresh_token": refresh}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body(resp).await["message"], "Logged out successfully");
        assert!(!harness.sessions.is_empty());

        let req = test::TestRequest::get()
            .uri("/api/v1/user/profile")
            .insert_header(bearer(&access))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(resp).await["error"], "Invalid token");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({"refresh_token": refresh}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_refresh_token_is_single_use() {
        let harness = TestHarness::new();
        harness.seed_user("sam@example.com", vec![Role::User]).await;
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let token = login!(&app, "sam@example.com");
        let refresh = token["refresh_token"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({"refresh_token": refresh}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let renewed = body(resp).await;
        assert_ne!(renewed["data"]["token"]["refresh_token"].as_str(), Some(refresh.as_str()));

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .set_json(json!({"refresh_token": refresh}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(resp).await["error"], "Invalid token");
    }

    #[actix_web::test]
    async fn test_admin_routes_require_admin_role() {
        let harness = TestHarness::new();
        let member = harness.seed_user("member@example.com", vec![Role::User]).await;
        harness.seed_user("root@example.com", vec![Role::Admin]).await;
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;
        let member_id = member.id_string().unwrap();

        let token = login!(&app, "member@example.com");
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/admin/users/{}", member_id))
            .insert_header(bearer(token["access_token"].as_str().unwrap()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert_eq!(body(resp).await["error"], "Insufficient permissions");

        let token = login!(&app, "root@example.com");
        let admin_access = token["access_token"].as_str().unwrap().to_string();
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/admin/users/{}", member_id))
            .insert_header(bearer(&admin_access))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body(resp).await["data"]["email"], "member@example.com");

        let req = test::TestRequest::get()
            .uri("/api/v1/admin/users/000000000000000000000000")
            .insert_header(bearer(&admin_access))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(resp).await["error"], "User not found");
    }

    #[actix_web::test]
    async fn test_authorization_header_errors() {
        let harness = TestHarness::new();
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let req = test::TestRequest::get().uri("/api/v1/user/profile").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(resp).await["error"], "Authorization header is required");

        let req = test::TestRequest::get()
            .uri("/api/v1/user/profile")
            .insert_header(("Authorization", "Token abc"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(resp).await["error"], "Invalid token format");

        let req = test::TestRequest::get()
            .uri("/api/v1/user/profile")
            .insert_header(bearer("not.a.jwt"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body(resp).await["error"], "Invalid token");
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_credentials() {
        let harness = TestHarness::new();
        harness.seed_user("sam@example.com", vec![Role::User]).await;
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        for (email, password) in [("sam@example.com", "Wrong#99"), ("ghost@example.com", PASSWORD)] {
            let req = test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(json!({"email": email, "password": password}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body(resp).await["error"], "Invalid email or password");
        }
    }

    #[actix_web::test]
    async fn test_register_validation_and_duplicates() {
        let harness = TestHarness::new();
        harness.seed_user("taken@example.com", vec![Role::User]).await;
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Al",
                "email": "not-an-email",
                "password": "weak",
                "confirm_password": "other",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let errors = body(resp).await;
        assert_eq!(errors["success"], false);
        assert!(errors["errors"].as_array().unwrap().len() >= 3);

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "name": "Taken Again",
                "email": "taken@example.com",
                "password": PASSWORD,
                "confirm_password": PASSWORD,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body(resp).await["error"], "Email already exists");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_auth_scope_has_its_own_limit() {
        let harness = TestHarness::with_config(test_config(&[("RATE_LIMIT_AUTH", "2")]));
        harness.seed_user("sam@example.com", vec![Role::User]).await;
        let app = test::init_service(App::new().configure(configure(harness.state.clone()))).await;

        let token = login!(&app, "sam@example.com");
        login!(&app, "sam@example.com");

        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": "sam@example.com", "password": PASSWORD}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        // 전역 한도는 아직 남아 있음
        let req = test::TestRequest::get()
            .uri("/api/v1/user/profile")
            .insert_header(bearer(token["access_token"].as_str().unwrap()))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
