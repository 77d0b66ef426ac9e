//! 영속 엔티티 모듈
//!
//! - [`members`] - 회원 엔티티 (MongoDB `members` 컬렉션)

pub mod members;

pub use members::*;
