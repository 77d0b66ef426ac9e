//! # 회원 관련 요청 DTO 모듈

pub mod request;

pub use request::{PasswordRequest, SignUpRequest};
