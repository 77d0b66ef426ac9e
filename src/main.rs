//! 프렌디 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! MongoDB(회원)와 Redis(리프레시 토큰) 연결을 설정하고 JWT 인증 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use friendy_auth_backend::caching::RedisClient;
use friendy_auth_backend::config::{
    DatabaseConfig, Environment, JwtConfig, ServerConfig, StoreBackend, StoreConfig,
};
use friendy_auth_backend::core::errors::AppError;
use friendy_auth_backend::db::Database;
use friendy_auth_backend::repositories::members::MongoMemberRepository;
use friendy_auth_backend::repositories::tokens::{
    InMemoryRevocationStore, RedisRevocationStore, RevocationStore,
};
use friendy_auth_backend::routes::configure_all_routes;
use friendy_auth_backend::services::auth::{AuthService, JwtTokenProvider};
use friendy_auth_backend::services::members::{
    MemberService, RandomSaltGenerator, Sha256PasswordEncryptor,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 프렌디 인증 서비스 시작중... (environment: {:?})", Environment::current());

    let (auth_service, member_service) = build_services().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(web::Data::new(auth_service), web::Data::new(member_service)).await
}

/// 저장소 연결을 만들고 서비스를 조립합니다
///
/// MongoDB 연결 실패, Redis 연결 실패는 기동 실패로 이어집니다.
async fn build_services() -> Result<(AuthService, MemberService), AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
    let member_repo = Arc::new(MongoMemberRepository::new(&database));
    if let Err(e) = member_repo.create_indexes().await {
        warn!("members 인덱스 생성 실패: {}", e);
    }

    let revocation_store = build_revocation_store().await?;

    let password_encryptor = Arc::new(Sha256PasswordEncryptor);
    let token_provider = Arc::new(JwtTokenProvider::new(JwtConfig::from_env()));

    let auth_service = AuthService::new(
        member_repo.clone(),
        password_encryptor.clone(),
        token_provider,
        revocation_store,
    );
    let member_service = MemberService::new(
        member_repo,
        password_encryptor,
        Arc::new(RandomSaltGenerator),
    );

    Ok((auth_service, member_service))
}

async fn build_revocation_store() -> Result<Arc<dyn RevocationStore>, AppError> {
    match StoreConfig::backend() {
        StoreBackend::Redis => {
            let redis_client = Arc::new(RedisClient::new(&StoreConfig::redis_url()).await?);
            Ok(Arc::new(RedisRevocationStore::new(redis_client)))
        }
        StoreBackend::Memory => {
            warn!("인메모리 리프레시 토큰 저장소 사용 중 - 재시작 시 모든 세션이 사라집니다");
            Ok(Arc::new(InMemoryRevocationStore::new()))
        }
    }
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
async fn start_http_server(
    auth_service: web::Data<AuthService>,
    member_service: web::Data<MemberService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(auth_service.clone())
            .app_data(member_service.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
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
/// `RUST_LOG` 기본값은 "info,actix_web=debug" 입니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 토큰이 응답 헤더로 전달되므로 두 인증 헤더를 노출합니다.
fn configure_cors() -> Cors {
    let refresh_header = HeaderName::from_static("authorization-refresh");

    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            refresh_header.clone(),
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::AUTHORIZATION, refresh_header, header::LOCATION])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
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
