//! # Member HTTP Handlers
//!
//! 회원가입과 비밀번호 재설정 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/members/signup` | 회원가입 | 201 Created + `Location` |
//! | `POST` | `/members/password` | 비밀번호 재설정 (`Authorization` 필요) | 200 OK |
//!
//! 비밀번호 재설정은 로그인한 본인만 할 수 있으며, 성공하면 기존 세션이 만료됩니다.
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PostMapping("/signup")
//! public ResponseEntity<Void> signUp(@Valid @RequestBody MemberSignUpRequest request) {
//!     return ResponseEntity.created(URI.create("/users/" + memberService.signUp(request))).build();
//! }
//! ```

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::{
            members::{PasswordRequest, SignUpRequest},
            response::ApiResponse,
        },
        models::token::TokenKind,
    },
    services::{
        auth::{AuthService, TokenExtractor},
        members::MemberService,
    },
};

#[post("/signup")]
pub async fn sign_up(
    member_service: web::Data<MemberService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let member = member_service.sign_up(payload.into_inner()).await?;
    let id = member.id_string().unwrap_or_default();

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/v1/members/{}", id)))
        .json(ApiResponse::success(json!({ "id": id }))))
}

#[post("/password")]
pub async fn reset_password(
    auth_service: web::Data<AuthService>,
    member_service: web::Data<MemberService>,
    req: HttpRequest,
    payload: web::Json<PasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let access_token = TokenExtractor.extract_from_request(TokenKind::Access, &req)?;
    let email = auth_service.authenticate(&access_token).await?;

    if email != payload.email {
        return Err(AppError::UnauthorizedUser(format!(
            "인증 실패(다른 회원의 비밀번호 변경 시도) - 토큰 : {}",
            access_token
        )));
    }

    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    member_service.reset_password(payload.into_inner()).await?;
    auth_service.revoke_session(&email).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("비밀번호가 변경되었습니다.")))
}
