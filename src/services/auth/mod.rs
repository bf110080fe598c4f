//! 인증 서비스 모듈
//!
//! - [`session_service`] - 세션 토큰 발급/복원/무효화
//! - [`oauth_service`] - Google/Facebook OAuth 브리지
//! - [`oauth_state`] - OAuth `state` 서명 (CSRF 방지)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{OAuthService, SessionManager};
//!
//! let redirect = oauth.begin_auth(OAuthProvider::Google)?;
//! let user = oauth.complete_auth(OAuthProvider::Google, &query, cookie_state).await?;
//! let token = sessions.serialize(&user)?;
//! ```

pub mod session_service;
pub mod oauth_service;
pub mod oauth_state;

pub use session_service::*;
pub use oauth_service::*;
pub use oauth_state::*;
