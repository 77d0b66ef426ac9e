//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 본문을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 같은 역할을 하며,
//! 모든 요청 DTO는 `validator` crate로 유효성을 검증합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `auth`, `members` 모듈 | HTTP 요청 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<HttpResponse, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/        # 로그인 요청
//! ├── members/     # 회원가입, 비밀번호 재설정 요청
//! └── response.rs  # 공통 응답 래퍼
//! ```
//!
//! 토큰 자체는 본문이 아니라 헤더(`Authorization`, `Authorization-Refresh`)로
//! 전달되므로 토큰 응답 DTO는 존재하지 않습니다.

pub mod auth;
pub mod members;
pub mod response;

pub use auth::LoginRequest;
pub use members::{PasswordRequest, SignUpRequest};
pub use response::ApiResponse;
