//! 회원 서비스 모듈
//!
//! - [`encryption`] - 비밀번호 다이제스트와 솔트 생성
//! - [`member_service`] - 회원가입, 비밀번호 재설정

pub mod encryption;
pub mod member_service;

pub use encryption::*;
pub use member_service::*;
