//! 프렌디 커뮤니티 인증 서비스 백엔드
//!
//! 이메일/비밀번호 로그인, JWT 액세스/리프레시 토큰 발급과 검증,
//! 그리고 Redis에 보관한 "현재 리프레시 토큰"을 통한 세션 무효화를 제공합니다.
//!
//! # Features
//!
//! - **회원 관리**: 회원가입, 비밀번호 재설정, 회원 탈퇴
//! - **JWT 인증**: 종류별 비밀키를 쓰는 HS256 액세스/리프레시 토큰
//! - **토큰 회전**: 재발급할 때마다 리프레시 토큰 교체, 재사용된 토큰 거부
//! - **MongoDB**: 회원 데이터 영구 저장
//! - **Redis**: 신원별 현재 리프레시 토큰 저장 (TTL 자동 만료)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 헤더에서 토큰 추출, 본문 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AuthService, MemberService, JwtTokenProvider
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MemberRepository, RevocationStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use friendy_auth_backend::config::JwtConfig;
//! use friendy_auth_backend::services::auth::{AuthService, JwtTokenProvider};
//!
//! let provider = Arc::new(JwtTokenProvider::new(JwtConfig::from_env()));
//! let auth_service = AuthService::new(member_repo, encryptor, provider, revocation_store);
//!
//! let tokens = auth_service.login("example@friendy.com", "password123!").await?;
//! let rotated = auth_service.reissue_token(&tokens.refresh_token).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
