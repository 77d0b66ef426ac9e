//! # Application Error Handling System
//!
//! 인증 백엔드 전역에서 사용하는 에러 처리 시스템입니다.
//! 토큰 검증, 세션 관리, 회원 관리 계층에서 발생하는 모든 실패를
//! 하나의 태그드 에러 타입(`AppError`)으로 표현합니다.
//!
//! ## 설계 원칙
//!
//! ### 1. 고정된 에러 분류
//! 호출자(핸들러, 미들웨어)는 에러 *종류*로 분기합니다. 따라서 인증 관련
//! 변형(`Malformed`, `Expired`, `MissingClaim`, `UnauthorizedEmail`,
//! `UnauthorizedPassword`, `UnauthorizedUser`, `CarrierMalformed`)은
//! 절대 합치거나 이름을 바꾸지 않습니다.
//!
//! ### 2. 상세 메시지는 로그 전용
//! 각 변형은 `(종류, 상세)` 쌍을 담습니다. 상세 문자열에는 원본 토큰 값이
//! 포함될 수 있으므로 서버 로그에만 기록되고, HTTP 응답에는 종류별
//! 일반 메시지만 노출됩니다.
//!
//! ### 3. 인프라 에러 분리
//! 리보케이션 저장소(Redis) I/O 실패는 `StoreError`로 구분되어
//! `UnauthorizedUser`로 흡수되지 않습니다. 호스트가 재시도 여부를 결정합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn ensure_logged_in(exists: bool, token: &str) -> AppResult<()> {
//!     if !exists {
//!         return Err(AppError::UnauthorizedUser(
//!             format!("인증 실패(로그아웃된 사용자) - 토큰 : {}", token)
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 변형은 서버 로그용 상세 메시지를 담습니다.
/// `actix_web::ResponseError` 구현을 통해 HTTP 응답으로 자동 변환되며,
/// 이때 상세 메시지는 응답 본문에 포함되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 구조가 잘못되었거나 서명이 일치하지 않는 토큰 (401)
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// 만료 시각이 지난 토큰 (401)
    #[error("Expired token: {0}")]
    Expired(String),

    /// 형식은 올바르지만 식별자(이메일) 클레임이 없는 토큰 (401)
    #[error("Missing claim: {0}")]
    MissingClaim(String),

    /// 해당 이메일의 회원이 존재하지 않음 (401)
    #[error("Unauthorized email: {0}")]
    UnauthorizedEmail(String),

    /// 비밀번호 불일치 (401)
    #[error("Unauthorized password: {0}")]
    UnauthorizedPassword(String),

    /// 리보케이션 저장소에 세션이 없음 - 로그인 상태가 아니거나 이미 폐기됨 (401)
    #[error("Unauthorized user: {0}")]
    UnauthorizedUser(String),

    /// 헤더에서 `Bearer ` 접두사가 붙은 토큰을 찾지 못함 (401)
    #[error("Carrier malformed: {0}")]
    CarrierMalformed(String),

    /// 리보케이션 저장소 I/O 에러 (503)
    ///
    /// 일시적인 장애일 수 있으므로 인증 실패와 구분됩니다.
    #[error("Revocation store error: {0}")]
    StoreError(String),

    /// 회원 데이터베이스 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류를 나타내는 고정 문자열
    ///
    /// 응답 본문의 `error` 필드와 로그의 분류 키로 사용됩니다.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Malformed(_) => "MALFORMED_TOKEN",
            AppError::Expired(_) => "EXPIRED_TOKEN",
            AppError::MissingClaim(_) => "MISSING_CLAIM",
            AppError::UnauthorizedEmail(_) => "UNAUTHORIZED_EMAIL",
            AppError::UnauthorizedPassword(_) => "UNAUTHORIZED_PASSWORD",
            AppError::UnauthorizedUser(_) => "UNAUTHORIZED_USER",
            AppError::CarrierMalformed(_) => "CARRIER_MALFORMED",
            AppError::StoreError(_) => "STORE_UNAVAILABLE",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::ValidationError(_) => "INVALID_REQUEST",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::InternalError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 서비스 고유 에러 코드
    pub fn code(&self) -> u16 {
        match self {
            AppError::ValidationError(_) => 1101,
            AppError::ConflictError(_) => 1201,
            AppError::UnauthorizedEmail(_) => 1301,
            AppError::UnauthorizedPassword(_) => 1302,
            AppError::UnauthorizedUser(_) => 1303,
            AppError::Malformed(_) => 1304,
            AppError::Expired(_) => 1305,
            AppError::MissingClaim(_) => 1306,
            AppError::CarrierMalformed(_) => 1307,
            AppError::InternalError(_) => 2000,
            AppError::DatabaseError(_) => 2001,
            AppError::StoreError(_) => 2002,
        }
    }

    /// 로그 전용 상세 메시지
    ///
    /// 원본 토큰 값이 포함될 수 있으므로 클라이언트에 그대로 노출하지 않습니다.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Malformed(d)
            | AppError::Expired(d)
            | AppError::MissingClaim(d)
            | AppError::UnauthorizedEmail(d)
            | AppError::UnauthorizedPassword(d)
            | AppError::UnauthorizedUser(d)
            | AppError::CarrierMalformed(d)
            | AppError::StoreError(d)
            | AppError::DatabaseError(d)
            | AppError::ValidationError(d)
            | AppError::ConflictError(d)
            | AppError::InternalError(d) => d,
        }
    }

    /// 인증 실패(401) 계열 에러인지 여부
    pub fn is_unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Malformed(_)
            | AppError::Expired(_)
            | AppError::MissingClaim(_)
            | AppError::UnauthorizedEmail(_)
            | AppError::UnauthorizedPassword(_)
            | AppError::UnauthorizedUser(_)
            | AppError::CarrierMalformed(_) => StatusCode::UNAUTHORIZED,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::StoreError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 클라이언트에 노출해도 안전한 일반 메시지
    fn public_message(&self) -> String {
        match self {
            AppError::Malformed(_)
            | AppError::Expired(_)
            | AppError::MissingClaim(_)
            | AppError::UnauthorizedUser(_)
            | AppError::CarrierMalformed(_) => "인증에 실패하였습니다.".to_string(),
            AppError::UnauthorizedEmail(_) => "해당 이메일의 회원이 존재하지 않습니다.".to_string(),
            AppError::UnauthorizedPassword(_) => {
                "로그인에 실패하였습니다. 비밀번호를 확인해주세요.".to_string()
            }
            // 검증/충돌 메시지는 토큰을 담지 않는 사용자 입력 피드백입니다
            AppError::ValidationError(d) | AppError::ConflictError(d) => d.clone(),
            AppError::StoreError(_) => "일시적으로 요청을 처리할 수 없습니다.".to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "서버 내부 오류가 발생하였습니다.".to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 상세 메시지는 여기에서 로그로만 남기고, 본문에는
    /// `{ "code", "error", "message" }` 형태의 일반 정보만 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            log::error!("[{}] {}", self.kind(), self.detail());
        } else {
            log::warn!("[{}] {}", self.kind(), self.detail());
        }

        actix_web::HttpResponse::build(status).json(serde_json::json!({
            "code": self.code(),
            "error": self.kind(),
            "message": self.public_message(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let token = encode(&header, &claims, &key).context("토큰 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
