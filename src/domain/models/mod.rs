//! # Domain Models
//!
//! 영속되지 않는 도메인 모델을 정의합니다.
//!
//! - [`oauth`] - 프로바이더 프로필 응답과 정규화된 [`ProviderProfile`](oauth::ProviderProfile)
//! - [`auth`] - 요청에 부착되는 [`AuthenticatedUser`](auth::AuthenticatedUser)
//! - [`session`] - 세션 토큰 클레임

pub mod oauth;
pub mod auth;
pub mod session;
