//! # 인증 관련 요청 DTO 모듈
//!
//! 토큰은 본문이 아닌 `Authorization` / `Authorization-Refresh` 헤더로 오가므로
//! 본문 DTO는 로그인 요청 하나뿐입니다.

pub mod request;

pub use request::LoginRequest;
