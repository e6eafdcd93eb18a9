//! 세션 게이트 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB, Redis 연결을 확인한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 연결 확인은 모두 시작 데드라인 안에 끝나야 하며, 실패하면 프로세스가 종료됩니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use session_gate::caching::RedisSessionStore;
use session_gate::config::AppConfig;
use session_gate::db::Database;
use session_gate::repositories::UserRepository;
use session_gate::routes;
use session_gate::state::AppState;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 세션 게이트 시작중...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;
    info!("환경: {:?}, JWT 설정: {:?}", config.environment, config.jwt);

    let state = initialize_state(config).await?;
    let _sweepers = state.spawn_background_tasks();

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(state).await
}

/// 데이터 스토어에 연결하고 애플리케이션 상태를 조립합니다.
///
/// # Errors
///
/// * MongoDB 연결/인덱스 생성 실패
/// * Redis 연결 실패
async fn initialize_state(config: AppConfig) -> io::Result<AppState> {
    let startup_timeout = config.session.startup_timeout;

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.data, startup_timeout)
        .await
        .map_err(|e| startup_error("MongoDB", e))?;
    info!("✅ MongoDB 연결 성공");

    let users = UserRepository::new(&database, config.session.request_timeout);
    users
        .create_indexes()
        .await
        .map_err(|e| startup_error("MongoDB 인덱스", e))?;

    let sessions = RedisSessionStore::connect(&config.data.redis_url, startup_timeout)
        .await
        .map_err(|e| startup_error("Redis", e))?;
    info!("✅ Redis 연결 성공");

    Ok(AppState::new(config, Arc::new(sessions), Arc::new(users)))
}

fn startup_error(component: &str, e: impl std::fmt::Display) -> io::Error {
    error!("❌ {} 초기화 실패: {}", component, e);
    io::Error::other(format!("{} 초기화 실패: {}", component, e))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어는 앱 전체에, Rate Limit과 인증은
/// 라우트 스코프 단위로 적용됩니다.
async fn start_http_server(state: AppState) -> io::Result<()> {
    let bind_address = state.config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!(
        "🛡️ Rate Limiting: 전역 {}요청/{:?}, 인증 {}요청/{:?}",
        state.config.rate_limit.global.rate,
        state.config.rate_limit.global.interval,
        state.config.rate_limit.auth.rate,
        state.config.rate_limit.auth.interval,
    );

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes::configure(state.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev (기본값)
/// * `PROFILE=prod` - .env.prod
/// * 기타 - .env
///
/// `RUST_LOG`도 이 파일에서 올 수 있으므로 로거보다 먼저 호출하고,
/// 결과는 로거 초기화 후에 기록합니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// `RUST_LOG`가 없으면 `info,actix_web=info`를 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}
