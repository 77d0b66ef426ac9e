//! # JWT 토큰 발급/검증 서비스
//!
//! 액세스 토큰과 리프레시 토큰을 하나의 구현으로 다룹니다. 두 종류는
//! [`TokenKind`]로 구분되며, 종류마다 서로 다른 비밀키와 유효 기간을 씁니다.
//!
//! ## 검증 순서
//!
//! 1. 구조 및 서명 (`Malformed`, `NotSignedByExpectedKey`)
//! 2. 만료 (`now >= exp` 이면 `Expired`, 여유 시간 없음)
//! 3. 이메일 클레임 존재 여부 (`MissingClaim`)
//!
//! 만료 판정은 `jsonwebtoken`의 `exp` 검증을 끄고 주입된 [`Clock`]으로 직접 수행합니다.
//! 이 서비스는 리프레시 토큰 저장소를 조회하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let provider = JwtTokenProvider::new(JwtConfig::from_env());
//!
//! let token = provider.issue(TokenKind::Access, "example@friendy.com")?;
//! let email = provider.extract_identity(TokenKind::Access, &token)?;
//! ```

use std::sync::Arc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::models::token::{InvalidReason, TokenClaims, TokenKind, ValidationOutcome},
    utils::clock::{Clock, SystemClock},
};

/// 토큰 종류 하나에 대한 서명 키와 유효 기간
struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: std::time::Duration,
}

impl SigningKeys {
    fn new(secret: &str, ttl: std::time::Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

/// HS256 토큰 발급기 겸 검증기
pub struct JwtTokenProvider {
    access: SigningKeys,
    refresh: SigningKeys,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl JwtTokenProvider {
    pub fn new(config: JwtConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp는 Clock 기준으로 직접 판정
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Self {
            access: SigningKeys::new(&config.access.secret, config.access.ttl),
            refresh: SigningKeys::new(&config.refresh.secret, config.refresh.ttl),
            validation,
            clock,
        }
    }

    fn keys(&self, kind: TokenKind) -> &SigningKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    pub fn ttl(&self, kind: TokenKind) -> std::time::Duration {
        self.keys(kind).ttl
    }

    /// 신원(이메일)을 담은 토큰을 발급합니다.
    ///
    /// 같은 초에 발급해도 `jti`가 달라 항상 새로운 문자열이 나옵니다.
    pub fn issue(&self, kind: TokenKind, identity: &str) -> AppResult<String> {
        let keys = self.keys(kind);
        let now = self.clock.now();
        let ttl = chrono::Duration::from_std(keys.ttl)
            .with_context(|| format!("{} 토큰 유효 기간 변환 실패", kind.label()))?;
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AppError::InternalError(format!("{} 토큰 만료 시각 계산 실패", kind.label()))
        })?;

        let claims = TokenClaims {
            email: Some(identity.to_string()),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Some(Uuid::new_v4().to_string()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .with_context(|| format!("{} 토큰 생성 실패", kind.label()))
    }

    /// 토큰을 검증하고 결과를 값으로 돌려줍니다.
    pub fn verify(&self, kind: TokenKind, token: &str) -> ValidationOutcome {
        let claims = match decode::<TokenClaims>(token, &self.keys(kind).decoding, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => InvalidReason::NotSignedByExpectedKey,
                    _ => InvalidReason::Malformed,
                };
                log::debug!("{} 토큰 디코딩 실패: {:?}", kind.label(), e);
                return ValidationOutcome::Invalid(reason);
            }
        };

        if self.clock.now().timestamp() >= claims.exp {
            return ValidationOutcome::Invalid(InvalidReason::Expired);
        }

        if claims.email.is_none() {
            return ValidationOutcome::Invalid(InvalidReason::MissingClaim);
        }

        ValidationOutcome::Valid(claims)
    }

    /// 검증을 통과한 토큰에서 신원(이메일)을 꺼냅니다.
    ///
    /// 이메일 클레임이 비어 있어도 `MissingClaim`입니다.
    pub fn extract_identity(&self, kind: TokenKind, token: &str) -> AppResult<String> {
        let claims = self.verify(kind, token).into_result(kind, token)?;

        match claims.email {
            Some(email) if !email.is_empty() => Ok(email),
            _ => Err(InvalidReason::MissingClaim.into_error(kind, token)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::config::TokenSettings;
    use crate::utils::clock::ManualClock;

    const ACCESS_SECRET: &str = "test-access-secret-for-friendy-community";
    const REFRESH_SECRET: &str = "test-refresh-secret-for-friendy-community";
    const EMAIL: &str = "example@friendy.com";

    fn config() -> JwtConfig {
        JwtConfig::new(
            TokenSettings::new(ACCESS_SECRET, Duration::from_secs(30 * 60)),
            TokenSettings::new(REFRESH_SECRET, Duration::from_secs(14 * 24 * 60 * 60)),
        )
    }

    fn sign(claims: serde_json::Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_issue_then_extract_identity() {
        let provider = JwtTokenProvider::new(config());

        for kind in [TokenKind::Access, TokenKind::Refresh] {
            let token = provider.issue(kind, EMAIL).unwrap();

            assert_eq!(token.split('.').count(), 3);
            assert!(provider.verify(kind, &token).is_valid());
            assert_eq!(provider.extract_identity(kind, &token).unwrap(), EMAIL);
        }
    }

    #[test]
    fn test_issue_sets_expiry_from_ttl() {
        let clock = ManualClock::starting_now();
        let provider = JwtTokenProvider::with_clock(config(), Arc::new(clock.clone()));

        let token = provider.issue(TokenKind::Access, EMAIL).unwrap();
        let outcome = provider.verify(TokenKind::Access, &token);
        let claims = outcome.claims().unwrap();

        assert_eq!(claims.exp - claims.iat, 30 * 60);
        assert!(claims.jti.is_some());
    }

    #[test]
    fn test_issue_with_unrepresentable_expiry_fails() {
        let config = JwtConfig::new(
            TokenSettings::new(ACCESS_SECRET, Duration::from_secs(30 * 60)),
            TokenSettings::new(REFRESH_SECRET, Duration::from_millis(9_000_000_000_000_000_000)),
        );
        let provider = JwtTokenProvider::new(config);

        let result = provider.issue(TokenKind::Refresh, EMAIL);

        assert!(matches!(result, Err(AppError::InternalError(_))));
        assert!(provider.issue(TokenKind::Access, EMAIL).is_ok());
    }

    #[test]
    fn test_tokens_issued_in_same_second_differ() {
        let clock = ManualClock::starting_now();
        let provider = JwtTokenProvider::with_clock(config(), Arc::new(clock));

        let first = provider.issue(TokenKind::Refresh, EMAIL).unwrap();
        let second = provider.issue(TokenKind::Refresh, EMAIL).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_token_is_malformed_for_both_kinds() {
        let provider = JwtTokenProvider::new(config());

        for kind in [TokenKind::Access, TokenKind::Refresh] {
            assert_eq!(
                provider.verify(kind, "aabbcc").reason(),
                Some(InvalidReason::Malformed)
            );
            assert!(matches!(
                provider.extract_identity(kind, "aabbcc"),
                Err(AppError::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_token_without_email_is_missing_claim() {
        let provider = JwtTokenProvider::new(config());
        let token = sign(
            serde_json::json!({ "iat": chrono::Utc::now().timestamp(), "exp": far_future() }),
            ACCESS_SECRET,
        );

        assert_eq!(
            provider.verify(TokenKind::Access, &token).reason(),
            Some(InvalidReason::MissingClaim)
        );
        assert!(matches!(
            provider.extract_identity(TokenKind::Access, &token),
            Err(AppError::MissingClaim(_))
        ));
    }

    #[test]
    fn test_empty_email_is_missing_claim_on_extract() {
        let provider = JwtTokenProvider::new(config());
        let token = sign(
            serde_json::json!({ "email": "", "exp": far_future() }),
            REFRESH_SECRET,
        );

        assert!(matches!(
            provider.extract_identity(TokenKind::Refresh, &token),
            Err(AppError::MissingClaim(_))
        ));
    }

    #[test]
    fn test_expired_token_is_expired_not_malformed() {
        let clock = ManualClock::starting_now();
        let provider = JwtTokenProvider::with_clock(config(), Arc::new(clock.clone()));
        let token = provider.issue(TokenKind::Access, EMAIL).unwrap();

        clock.advance(chrono::Duration::minutes(31));

        assert_eq!(
            provider.verify(TokenKind::Access, &token).reason(),
            Some(InvalidReason::Expired)
        );
        assert!(matches!(
            provider.extract_identity(TokenKind::Access, &token),
            Err(AppError::Expired(_))
        ));
    }

    #[test]
    fn test_expiry_boundary_is_strict() {
        let clock = ManualClock::starting_now();
        let provider = JwtTokenProvider::with_clock(config(), Arc::new(clock.clone()));
        let token = provider.issue(TokenKind::Access, EMAIL).unwrap();
        let exp = provider.verify(TokenKind::Access, &token).claims().unwrap().exp;

        clock.set(chrono::DateTime::from_timestamp(exp - 1, 0).unwrap());
        assert!(provider.verify(TokenKind::Access, &token).is_valid());

        clock.set(chrono::DateTime::from_timestamp(exp, 0).unwrap());
        assert_eq!(
            provider.verify(TokenKind::Access, &token).reason(),
            Some(InvalidReason::Expired)
        );
    }

    #[test]
    fn test_expired_token_without_email_reports_expired_first() {
        let provider = JwtTokenProvider::new(config());
        let token = sign(serde_json::json!({ "exp": 1 }), ACCESS_SECRET);

        assert_eq!(
            provider.verify(TokenKind::Access, &token).reason(),
            Some(InvalidReason::Expired)
        );
    }

    #[test]
    fn test_access_token_is_not_a_refresh_token() {
        let provider = JwtTokenProvider::new(config());
        let access = provider.issue(TokenKind::Access, EMAIL).unwrap();

        assert_eq!(
            provider.verify(TokenKind::Refresh, &access).reason(),
            Some(InvalidReason::NotSignedByExpectedKey)
        );
        assert!(matches!(
            provider.extract_identity(TokenKind::Refresh, &access),
            Err(AppError::Malformed(_))
        ));
    }

    #[test]
    fn test_token_signed_with_unknown_key_is_rejected() {
        let provider = JwtTokenProvider::new(config());
        let forged = sign(
            serde_json::json!({ "email": EMAIL, "exp": far_future() }),
            "some-other-secret",
        );

        assert_eq!(
            provider.verify(TokenKind::Access, &forged).reason(),
            Some(InvalidReason::NotSignedByExpectedKey)
        );
    }
}
