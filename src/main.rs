//! 비밀 게시판 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 저장소(MongoDB 또는 메모리, Redis 또는 메모리)를 고르고
//! [`AppContext`]를 조립하여 핸들러에 전달합니다.

use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use secrets_board::caching::redis::RedisClient;
use secrets_board::config::{AppSettings, DatabaseConfig, ServerConfig, StoreBackend};
use secrets_board::core::AppContext;
use secrets_board::db::Database;
use secrets_board::errors::AppError;
use secrets_board::middlewares::SessionMiddleware;
use secrets_board::repositories::sessions::{
    InMemorySessionRepository, RedisSessionRepository, SessionRevocationStore,
};
use secrets_board::repositories::users::{InMemoryUserRepository, MongoUserRepository, UserStore};
use secrets_board::routes::configure_all_routes;
use secrets_board::services::auth::HttpIdentityProviderClient;

#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 비밀 게시판 서비스 시작중...");

    let context = build_context().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(context)).await
}

async fn build_context() -> Result<AppContext, AppError> {
    let settings = AppSettings::from_env();

    let users = initialize_user_store().await?;
    let revocations = initialize_session_store(settings.session.redis_url.as_deref()).await;
    let identity_client = Arc::new(HttpIdentityProviderClient::new()?);

    AppContext::new(settings, users, revocations, identity_client)
}

async fn initialize_user_store() -> Result<Arc<dyn UserStore>, AppError> {
    match DatabaseConfig::backend() {
        StoreBackend::Memory => {
            warn!("USER_STORE=memory: 사용자 데이터가 재시작 시 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        StoreBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Arc::new(Database::new().await?);
            let repository = MongoUserRepository::new(database);
            repository.create_indexes().await?;

            Ok(Arc::new(repository))
        }
    }
}

/// Redis 연결에 실패하면 메모리 저장소로 대체합니다.
async fn initialize_session_store(redis_url: Option<&str>) -> Arc<dyn SessionRevocationStore> {
    let Some(redis_url) = redis_url else {
        info!("REDIS_URL 미설정: 로그아웃 기록을 메모리에 보관합니다");
        return Arc::new(InMemorySessionRepository::new());
    };

    match RedisClient::connect(redis_url).await {
        Ok(client) => Arc::new(RedisSessionRepository::new(Arc::new(client))),
        Err(e) => {
            error!("Redis 연결 실패, 메모리 저장소 사용: {}", e);
            Arc::new(InMemorySessionRepository::new())
        }
    }
}

async fn start_http_server(context: web::Data<AppContext>) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(context.clone())
            // Rate Limiting
            .wrap(Governor::new(&governor_conf))
            .wrap(SessionMiddleware::new())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => {
            if dotenv::from_filename(".env.dev").is_err() {
                // 원래 프로젝트처럼 .env 하나만 있는 경우
                dotenv().ok();
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
