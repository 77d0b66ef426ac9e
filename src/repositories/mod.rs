//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 회원 저장소로, Redis를 리프레시 토큰 저장소로 사용합니다.
//! 두 저장소 모두 trait 뒤에 있으므로 테스트에서는 인메모리 구현으로 바꿔 끼웁니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::members::{MemberRepository, MongoMemberRepository};
//!
//! let members = MongoMemberRepository::new(&database);
//! let member = members.find_by_email("example@friendy.com").await?;
//! ```

pub mod members;
pub mod tokens;
