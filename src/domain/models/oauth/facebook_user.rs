//! Facebook Graph API `/me?fields=id,name,email` 응답 모델

use serde::Deserialize;

use crate::config::OAuthProvider;
use crate::domain::models::oauth::ProviderProfile;
use crate::utils::string_utils::clean_optional_string;

#[derive(Debug, Clone, Deserialize)]
pub struct FacebookUserInfo {
    /// 앱 범위(app-scoped) 사용자 ID
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// `email` 권한이 승인된 경우에만 포함
    #[serde(default)]
    pub email: Option<String>,
}

impl From<FacebookUserInfo> for ProviderProfile {
    fn from(info: FacebookUserInfo) -> Self {
        ProviderProfile {
            kind: OAuthProvider::Facebook,
            provider_id: info.id,
            emails: info.email.into_iter().collect(),
            display_name: clean_optional_string(info.name),
        }
    }
}
