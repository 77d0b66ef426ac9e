//! 도메인 모델 모듈
//!
//! 영속화되지 않는 값 객체를 정의합니다.
//!
//! - [`token`] - 토큰 종류, 클레임, 검증 결과, 토큰 쌍

pub mod token;

pub use token::*;
