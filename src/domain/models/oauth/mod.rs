//! # OAuth 프로필 모델
//!
//! 프로바이더별 프로필 응답(`GoogleUserInfo`, `FacebookUserInfo`)과
//! 이를 정규화한 [`ProviderProfile`]을 정의합니다.
//!
//! 프로바이더 응답은 저장소에 닿기 전에 항상 `ProviderProfile`로 변환됩니다.
//!
//! ```text
//! Google  /oauth2/v2/userinfo ──► GoogleUserInfo   ─┐
//!                                                   ├─► ProviderProfile ──► UserStore
//! Facebook /me?fields=id,...  ──► FacebookUserInfo ─┘
//! ```

pub mod provider_profile;
pub mod google_user;
pub mod facebook_user;

pub use provider_profile::*;
pub use google_user::*;
pub use facebook_user::*;
