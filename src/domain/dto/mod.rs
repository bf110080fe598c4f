//! # Data Transfer Objects
//!
//! HTTP 경계에서 오가는 폼, 쿼리, 외부 API 응답 구조체입니다.
//!
//! - [`forms`] - 회원가입/로그인/비밀 제출 폼
//! - [`oauth`] - OAuth 콜백 쿼리와 토큰 응답

pub mod forms;
pub mod oauth;

pub use forms::*;
pub use oauth::*;
