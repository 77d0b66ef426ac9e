//! JWT 토큰 종류, 클레임, 검증 결과
//!
//! 액세스/리프레시 두 종류의 토큰이 같은 클레임 구조를 공유합니다.
//! 검증 결과([`ValidationOutcome`])의 실패 사유는 호출자가 분기하는 기준이므로
//! 네 가지 사유를 그대로 유지합니다.
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};

/// 토큰 용도
///
/// 종류마다 서명 비밀키와 유효 기간이 다릅니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// 일반 요청에 사용하는 단기 토큰
    Access,
    /// 토큰 쌍 재발급 전용 장기 토큰
    Refresh,
}

impl TokenKind {
    /// 로그 메시지에 쓰는 한글 명칭
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Access => "액세스",
            TokenKind::Refresh => "리프레시",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
            TokenKind::Refresh => write!(f, "refresh"),
        }
    }
}

/// JWT 토큰의 클레임(Payload)
///
/// - `email`: 식별자 (리보케이션 저장소의 키)
/// - `iat`: 발급 시각 (Unix timestamp, 초)
/// - `exp`: 만료 시각 (Unix timestamp, 초)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰끼리도 값이 달라지도록 합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// 검증 실패 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// 구조가 잘못된 토큰
    Malformed,
    /// 만료 시각이 지난 토큰
    Expired,
    /// 식별자 클레임이 없는 토큰
    MissingClaim,
    /// 다른 키로 서명된 토큰
    NotSignedByExpectedKey,
}

/// 토큰 검증 결과
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(TokenClaims),
    Invalid(InvalidReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }

    pub fn claims(&self) -> Option<&TokenClaims> {
        match self {
            ValidationOutcome::Valid(claims) => Some(claims),
            ValidationOutcome::Invalid(_) => None,
        }
    }

    pub fn reason(&self) -> Option<InvalidReason> {
        match self {
            ValidationOutcome::Valid(_) => None,
            ValidationOutcome::Invalid(reason) => Some(*reason),
        }
    }

    /// 검증 결과를 `AppResult`로 변환합니다.
    pub fn into_result(self, kind: TokenKind, token: &str) -> AppResult<TokenClaims> {
        match self {
            ValidationOutcome::Valid(claims) => Ok(claims),
            ValidationOutcome::Invalid(reason) => Err(reason.into_error(kind, token)),
        }
    }
}

impl InvalidReason {
    /// 실패 사유를 `AppError`로 변환합니다.
    ///
    /// 상세 메시지에는 원본 토큰이 포함됩니다. `NotSignedByExpectedKey`는
    /// `AppError::Malformed`로 보고됩니다.
    pub fn into_error(self, kind: TokenKind, token: &str) -> AppError {
        let label = kind.label();
        match self {
            InvalidReason::Malformed => AppError::Malformed(
                format!("인증 실패(잘못된 {} 토큰) - 토큰 : {}", label, token),
            ),
            InvalidReason::NotSignedByExpectedKey => AppError::Malformed(
                format!("인증 실패(서명이 일치하지 않는 {} 토큰) - 토큰 : {}", label, token),
            ),
            InvalidReason::Expired => AppError::Expired(
                format!("인증 실패(만료된 {} 토큰) - 토큰 : {}", label, token),
            ),
            InvalidReason::MissingClaim => AppError::MissingClaim(
                format!("인증 실패(JWT {} 토큰 Payload 이메일 누락) - 토큰 : {}", label, token),
            ),
        }
    }
}

/// 액세스/리프레시 토큰 쌍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
