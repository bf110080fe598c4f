//! 애플리케이션 에러 모듈
//!
//! [`AppError`](errors::AppError)와 외부 에러 변환용 [`ErrorContext`](errors::ErrorContext)를 제공합니다.

pub mod errors;

pub use errors::*;
