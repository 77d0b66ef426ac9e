//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙집중식으로 관리합니다.
//!
//! - [`data_config`] - 서버, MongoDB, 리보케이션 저장소 설정
//! - [`auth_config`] - 액세스/리프레시 토큰 서명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="friendy"
//! export REDIS_URL="redis://localhost:6379"
//! export REVOCATION_STORE="redis"      # redis | memory
//!
//! # JWT
//! export JWT_ACCESS_SECRET="..."
//! export JWT_ACCESS_EXPIRATION="1800000"
//! export JWT_REFRESH_SECRET="..."
//! export JWT_REFRESH_EXPIRATION="1209600000"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${jwt.access.secret}")` | `JwtConfig::from_env()` |
//! | `@Profile("dev")` | `PROFILE=dev` → `.env.dev` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
