//! 사용자 관리 서비스 모듈
//!
//! 로컬 계정 가입/인증과 비밀 게시판 로직을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store, PasswordConfig::bcrypt_cost());
//! let user = user_service.register("alice", "password").await?;
//! ```

pub mod user_service;

pub use user_service::*;
