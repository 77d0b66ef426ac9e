//! # Core Module
//!
//! 인증 백엔드 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 토큰/세션/회원 계층의 고정된 에러 분류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현 (상세 메시지는 로그 전용)
//! - **AppResult / ErrorContext**: 결과 타입 별칭과 에러 변환 확장 trait
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 모듈 |
//! |--------|---------|
//! | `FriendyException(ErrorCode, message)` | `AppError::Variant(detail)` |
//! | `ErrorCode.getHttpStatus()` | `ResponseError::status_code()` |
//! | `GlobalExceptionHandler` | `AppError::error_response()` |

pub mod errors;

pub use errors::*;
