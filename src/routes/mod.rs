//! 라우트 구성
//!
//! 모든 API는 `/api/v1` 아래에 있습니다.
//!
//! ```text
//! GET    /health
//! POST   /api/v1/auth/login
//! POST   /api/v1/auth/logout
//! POST   /api/v1/auth/token/reissue
//! DELETE /api/v1/auth/withdrawal
//! POST   /api/v1/members/signup
//! POST   /api/v1/members/password
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_member_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::auth::reissue_token)
            .service(handlers::auth::withdrawal)
    );
}

fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/members")
            .service(handlers::members::sign_up)
            .service(handlers::members::reset_password)
    );
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "friendy_auth_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
