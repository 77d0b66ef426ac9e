//! # Authentication Configuration Module
//!
//! 액세스/리프레시 토큰의 서명 비밀키와 만료 시간을 관리합니다.
//! Spring의 `@Value("${jwt.access.secret}")` 필드 주입 대신, 기동 시점에
//! 한 번 읽어 들인 불변 구조체([`JwtConfig`])를 토큰 발급기 생성자에 넘깁니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_ACCESS_SECRET="access-secret"
//! export JWT_ACCESS_EXPIRATION="1800000"        # 밀리초 (30분)
//! export JWT_REFRESH_SECRET="refresh-secret"
//! export JWT_REFRESH_EXPIRATION="1209600000"    # 밀리초 (14일)
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::JwtConfig;
//! use crate::services::auth::JwtTokenProvider;
//!
//! let config = JwtConfig::from_env();
//! let provider = JwtTokenProvider::new(config);
//! ```

use std::env;
use std::fmt;
use std::time::Duration;
use crate::domain::models::token::TokenKind;

const DEFAULT_ACCESS_EXPIRATION_MS: u64 = 30 * 60 * 1000;
const DEFAULT_REFRESH_EXPIRATION_MS: u64 = 14 * 24 * 60 * 60 * 1000;

/// 토큰 종류 하나에 대한 서명 설정
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSettings {
    /// HMAC-SHA256 서명 비밀키
    pub secret: String,
    /// 발급 시점부터 만료까지의 유효 기간
    pub ttl: Duration,
}

impl TokenSettings {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }
}

// 비밀키가 로그에 찍히지 않도록 Debug를 직접 구현
impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"***")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// 액세스/리프레시 토큰 설정 묶음
///
/// 생성 후에는 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JwtConfig {
    pub access: TokenSettings,
    pub refresh: TokenSettings,
}

impl JwtConfig {
    pub fn new(access: TokenSettings, refresh: TokenSettings) -> Self {
        Self { access, refresh }
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    ///
    /// 비밀키가 없으면 개발용 기본값을 쓰고 경고를 남깁니다.
    /// 만료 시간 파싱에 실패하면 기본값(액세스 30분, 리프레시 14일)을 사용합니다.
    pub fn from_env() -> Self {
        let access = TokenSettings::new(
            secret_from_env("JWT_ACCESS_SECRET", "friendy-access-secret"),
            Duration::from_millis(parse_millis(
                "JWT_ACCESS_EXPIRATION",
                env::var("JWT_ACCESS_EXPIRATION").ok(),
                DEFAULT_ACCESS_EXPIRATION_MS,
            )),
        );

        let refresh = TokenSettings::new(
            secret_from_env("JWT_REFRESH_SECRET", "friendy-refresh-secret"),
            Duration::from_millis(parse_millis(
                "JWT_REFRESH_EXPIRATION",
                env::var("JWT_REFRESH_EXPIRATION").ok(),
                DEFAULT_REFRESH_EXPIRATION_MS,
            )),
        );

        if access.secret == refresh.secret {
            log::warn!("JWT_ACCESS_SECRET과 JWT_REFRESH_SECRET이 동일합니다. 토큰 종류 구분이 서명으로 보장되지 않습니다.");
        }

        let config = Self::new(access, refresh);
        log::info!("JWT 설정 로드됨: {:?}", config);
        config
    }

    /// 토큰 종류별 설정 조회
    pub fn settings(&self, kind: TokenKind) -> &TokenSettings {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

fn secret_from_env(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::warn!("{} not set, using default (not secure for production!)", key);
        fallback.to_string()
    })
}

fn parse_millis(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        Some(value) => value.trim().parse::<u64>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig::new(
            TokenSettings::new("access", Duration::from_secs(60)),
            TokenSettings::new("refresh", Duration::from_secs(3600)),
        )
    }

    #[test]
    fn test_settings_by_kind() {
        let config = config();

        assert_eq!(config.settings(TokenKind::Access).secret, "access");
        assert_eq!(config.settings(TokenKind::Refresh).ttl, Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_millis() {
        assert_eq!(parse_millis("K", Some("1500".to_string()), 10), 1500);
        assert_eq!(parse_millis("K", Some(" 42 ".to_string()), 10), 42);
        assert_eq!(parse_millis("K", Some("abc".to_string()), 10), 10);
        assert_eq!(parse_millis("K", None, 10), 10);
    }

    #[test]
    fn test_debug_hides_secret() {
        let printed = format!("{:?}", config());

        assert!(!printed.contains("\"access\""));
        assert!(printed.contains("***"));
    }
}
