//! 공통 유틸리티 모듈
//!
//! - [`clock`] - 만료 판정과 TTL 시뮬레이션에 쓰이는 시각 공급자

pub mod clock;

pub use clock::*;
