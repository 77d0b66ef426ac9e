//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩 주소, MongoDB, 리보케이션 저장소(Redis) 관련 설정을 관리합니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT")
                .or_else(|_| env::var("PROFILE"))
                .unwrap_or_else(|_| "production".to_string()),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "friendy_dev".to_string())
    }
}

/// 리보케이션 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    Redis,
    /// 프로세스 메모리 (개발/테스트 전용, 재시작 시 모든 세션 소멸)
    Memory,
}

pub struct StoreConfig;

impl StoreConfig {
    pub fn backend() -> StoreBackend {
        Self::backend_from_str(&env::var("REVOCATION_STORE").unwrap_or_default())
    }

    pub fn backend_from_str(s: &str) -> StoreBackend {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::Redis,
        }
    }

    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreConfig::backend_from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreConfig::backend_from_str("In-Memory"), StoreBackend::Memory);
        assert_eq!(StoreConfig::backend_from_str("redis"), StoreBackend::Redis);
        assert_eq!(StoreConfig::backend_from_str(""), StoreBackend::Redis);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
