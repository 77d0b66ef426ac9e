//! Authentication HTTP Handlers
//!
//! 로그인, 로그아웃, 토큰 재발급, 회원 탈퇴 엔드포인트입니다.
//! 토큰은 본문이 아닌 헤더로 주고받습니다.
//!
//! | 헤더 | 내용 |
//! |------|------|
//! | `Authorization` | `Bearer <액세스 토큰>` |
//! | `Authorization-Refresh` | `Bearer <리프레시 토큰>` |

use actix_web::{delete, post, web, HttpRequest, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::{auth::LoginRequest, response::ApiResponse},
        models::token::{TokenKind, TokenPair},
    },
    services::auth::{AuthService, TokenExtractor, ACCESS_TOKEN_HEADER, REFRESH_TOKEN_HEADER},
};

/// 이메일/비밀번호 로그인
///
/// 성공 시 두 토큰을 응답 헤더에 담아 200을 반환합니다.
#[post("/login")]
pub async fn login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let tokens = auth_service.login(&payload.email, &payload.password).await?;

    Ok(with_token_headers(HttpResponse::Ok(), &tokens).finish())
}

/// 로그아웃
///
/// 두 헤더가 모두 필요합니다.
#[post("/logout")]
pub async fn logout(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let access_token = TokenExtractor.extract_from_request(TokenKind::Access, &req)?;
    let refresh_token = TokenExtractor.extract_from_request(TokenKind::Refresh, &req)?;

    auth_service.logout(&access_token, &refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("로그아웃 되었습니다.")))
}

/// 리프레시 토큰으로 토큰 쌍 재발급
#[post("/token/reissue")]
pub async fn reissue_token(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let refresh_token = TokenExtractor.extract_from_request(TokenKind::Refresh, &req)?;

    let tokens = auth_service.reissue_token(&refresh_token).await?;

    Ok(with_token_headers(HttpResponse::Ok(), &tokens).finish())
}

/// 회원 탈퇴
#[delete("/withdrawal")]
pub async fn withdrawal(
    auth_service: web::Data<AuthService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let access_token = TokenExtractor.extract_from_request(TokenKind::Access, &req)?;

    auth_service.withdrawal(&access_token).await?;

    Ok(HttpResponse::NoContent().finish())
}

fn with_token_headers(
    mut builder: actix_web::HttpResponseBuilder,
    tokens: &TokenPair,
) -> actix_web::HttpResponseBuilder {
    builder
        .insert_header((ACCESS_TOKEN_HEADER, TokenExtractor::bearer(&tokens.access_token)))
        .insert_header((REFRESH_TOKEN_HEADER, TokenExtractor::bearer(&tokens.refresh_token)));
    builder
}
