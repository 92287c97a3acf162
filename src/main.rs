//! 문서 심사 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 협력 객체들을 조립합니다.
//! MongoDB, Redis 연결을 설정하고 역할 기반 문서 심사 API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use doc_review_service::caching::redis::RedisClient;
use doc_review_service::config::{Environment, RateLimitConfig, ServerConfig};
use doc_review_service::db::Database;
use doc_review_service::repositories::{DocLogRepository, DocReviewRepository, UserRepository};
use doc_review_service::routes::configure_all_routes;
use doc_review_service::services::auth::TokenService;
use doc_review_service::services::reviews::{DocReviewService, MongoDocReviewService};
use doc_review_service::services::users::{UserLookup, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 문서 심사 서비스 시작중... ({:?})", Environment::current());

    let (database, redis_client) = initialize_data_stores().await?;

    let user_repo = Arc::new(UserRepository::new(database.clone(), redis_client));
    let review_repo = Arc::new(DocReviewRepository::new(database.clone()));
    let log_repo = Arc::new(DocLogRepository::new(database));

    let review_service: Arc<dyn DocReviewService> =
        Arc::new(MongoDocReviewService::new(review_repo, log_repo));
    let user_lookup: Arc<dyn UserLookup> = Arc::new(UserService::new(user_repo));
    let token_service = web::Data::new(TokenService::from_config());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(review_service, user_lookup, token_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limiting 설정 오류 또는 서버 실행 오류
async fn start_http_server(
    review_service: Arc<dyn DocReviewService>,
    user_lookup: Arc<dyn UserLookup>,
    token_service: web::Data<TokenService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let review_service = web::Data::from(review_service);
    let user_lookup = web::Data::from(user_lookup);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 협력 객체
            .app_data(review_service.clone())
            .app_data(user_lookup.clone())
            .app_data(token_service.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=doc_review_service::handlers=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB와 Redis 연결을 초기화합니다
///
/// 연결에 실패하면 에러를 반환하고 서버는 시작되지 않습니다.
async fn initialize_data_stores() -> std::io::Result<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;

    info!("✅ MongoDB 데이터베이스 선택: {}", database.database_name());

    let redis_client = RedisClient::new()
        .await
        .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
