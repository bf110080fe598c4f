//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 주입받아 생성되며,
//! [`AppContext`](crate::core::context::AppContext)에 묶여 핸들러로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::SessionManager};
//!
//! let users = UserService::new(store.clone(), settings.bcrypt_cost);
//! let sessions = SessionManager::new(settings.session.clone(), revocations);
//! ```

pub mod users;
pub mod auth;
