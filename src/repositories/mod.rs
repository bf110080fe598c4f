//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소마다 trait과 구현을 분리하여, 실행 환경에서는 MongoDB/Redis를,
//! 테스트에서는 메모리 구현을 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let user = users.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
