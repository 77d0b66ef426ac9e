//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 회원 엔티티와 토큰 값 객체, API 경계의 DTO를 담습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속 객체 (Member)
//! ├── DTOs      - 요청/응답 본문
//! └── Models    - 토큰 종류, 클레임, 검증 결과
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, Redis, MongoDB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Value Object | `models` 모듈 | 불변 값 객체 |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::Member;
pub use dto::{ApiResponse, LoginRequest, PasswordRequest, SignUpRequest};
pub use models::{InvalidReason, TokenClaims, TokenKind, TokenPair, ValidationOutcome};
