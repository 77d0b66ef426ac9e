//! 리프레시 토큰 저장소 모듈
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::repositories::tokens::{InMemoryRevocationStore, RevocationStore};
//!
//! let store = InMemoryRevocationStore::new();
//! store.put("example@friendy.com", &refresh_token, ttl).await?;
//! let current = store.get("example@friendy.com").await?;
//! ```

pub mod token_repository;

pub use token_repository::*;
