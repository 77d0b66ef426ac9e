//! HTTP 핸들러 모듈
//!
//! 요청 본문 검증과 헤더 처리만 하고, 실제 로직은 `web::Data`로 주입된 서비스에 위임합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러 응답 변환은
//! `AppError`의 `ResponseError` 구현이 담당합니다.

pub mod auth;
pub mod members;
