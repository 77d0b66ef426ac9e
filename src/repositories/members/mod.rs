pub mod member_repo;

pub use member_repo::*;
