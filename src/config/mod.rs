//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - OAuth 프로바이더, 세션, OAuth state 설정
//! - [`app_config`] - 위 설정을 한 번에 모은 [`AppSettings`]
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AppSettings, ServerConfig};
//!
//! let settings = AppSettings::from_env();
//! let port = ServerConfig::port();
//! ```

pub mod data_config;
pub mod auth_config;
pub mod app_config;

pub use data_config::*;
pub use auth_config::*;
pub use app_config::*;
