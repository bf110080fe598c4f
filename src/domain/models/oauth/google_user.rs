//! # Google OAuth 사용자 정보 모델
//!
//! `https://www.googleapis.com/oauth2/v2/userinfo` 응답을 역직렬화합니다.
//!
//! | 필드 | 필요 스코프 |
//! |------|-------------|
//! | `id` | `profile` 또는 `openid` |
//! | `email`, `verified_email` | `email` |
//! | `name`, `given_name`, `family_name`, `picture` | `profile` |
//!
//! 기본 스코프는 `profile`이므로 `email`은 보통 비어 있습니다.

use serde::Deserialize;

use crate::config::OAuthProvider;
use crate::domain::models::oauth::ProviderProfile;
use crate::utils::string_utils::clean_optional_string;

/// Google UserInfo v2 응답
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 사용자 고유 ID
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub verified_email: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for ProviderProfile {
    fn from(info: GoogleUserInfo) -> Self {
        ProviderProfile {
            kind: OAuthProvider::Google,
            provider_id: info.id,
            emails: info.email.into_iter().collect(),
            display_name: clean_optional_string(info.name),
        }
    }
}
