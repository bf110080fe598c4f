//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`UserStore`](user_repo::UserStore) - 저장소 추상화
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 구현
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 메모리 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserStore};
//!
//! let users = MongoUserRepository::new(database);
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::*;
pub use memory_repo::*;
