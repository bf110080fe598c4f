//! # Core Module
//!
//! - [`context`] - 서비스와 뷰를 묶은 [`AppContext`](context::AppContext)

pub mod context;

pub use context::AppContext;
