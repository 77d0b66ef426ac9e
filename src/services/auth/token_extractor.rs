//! # 토큰 추출기
//!
//! HTTP 헤더 값(carrier)에서 `Bearer ` 접두사를 떼어 원본 토큰 문자열을 꺼냅니다.
//! 서명 검증이나 저장소 조회는 하지 않습니다.
//!
//! | 토큰 | 헤더 |
//! |------|------|
//! | 액세스 | `Authorization` |
//! | 리프레시 | `Authorization-Refresh` |

use actix_web::HttpRequest;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::token::TokenKind;

pub const ACCESS_TOKEN_HEADER: &str = "Authorization";
pub const REFRESH_TOKEN_HEADER: &str = "Authorization-Refresh";
pub const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Default, Clone, Copy)]
pub struct TokenExtractor;

impl TokenExtractor {
    pub fn extract_access_token(&self, carrier: Option<&str>) -> AppResult<String> {
        Self::strip_bearer(TokenKind::Access, carrier)
    }

    pub fn extract_refresh_token(&self, carrier: Option<&str>) -> AppResult<String> {
        Self::strip_bearer(TokenKind::Refresh, carrier)
    }

    /// 요청 헤더에서 토큰을 추출합니다.
    ///
    /// ASCII가 아닌 헤더 값은 없는 것으로 취급합니다.
    pub fn extract_from_request(&self, kind: TokenKind, request: &HttpRequest) -> AppResult<String> {
        let carrier = request
            .headers()
            .get(Self::header_name(kind))
            .and_then(|value| value.to_str().ok());

        match kind {
            TokenKind::Access => self.extract_access_token(carrier),
            TokenKind::Refresh => self.extract_refresh_token(carrier),
        }
    }

    pub fn header_name(kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Access => ACCESS_TOKEN_HEADER,
            TokenKind::Refresh => REFRESH_TOKEN_HEADER,
        }
    }

    /// 응답 헤더에 실을 `Bearer <token>` 값
    pub fn bearer(token: &str) -> String {
        format!("{}{}", BEARER_PREFIX, token)
    }

    fn strip_bearer(kind: TokenKind, carrier: Option<&str>) -> AppResult<String> {
        match carrier {
            Some(value) if !value.trim().is_empty() && value.starts_with(BEARER_PREFIX) => {
                Ok(value[BEARER_PREFIX.len()..].to_string())
            }
            _ => Err(AppError::CarrierMalformed(format!(
                "인증 실패({} 토큰 추출 실패) - 토큰 : {}",
                kind.label(),
                carrier.unwrap_or("null")
            ))),
        }
    }
}
