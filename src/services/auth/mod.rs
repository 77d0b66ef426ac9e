//! 인증 서비스 모듈
//!
//! JWT 기반 토큰 인증과 리프레시 토큰 회전을 담당합니다.
//!
//! # Features
//!
//! - 액세스/리프레시 토큰 발급과 검증 (HS256, 종류별 비밀키)
//! - HTTP 헤더에서 `Bearer` 토큰 추출
//! - 로그인, 로그아웃, 토큰 재발급, 회원 탈퇴
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenExtractor};
//!
//! let refresh = TokenExtractor.extract_refresh_token(Some("Bearer eyJ..."))?;
//! let tokens = auth_service.reissue_token(&refresh).await?;
//! ```

pub mod jwt_provider;
pub mod token_extractor;
pub mod auth_service;

pub use jwt_provider::*;
pub use token_extractor::*;
pub use auth_service::*;
