//! 애플리케이션 설정 묶음
//!
//! 요청 처리 중에는 환경 변수를 다시 읽지 않도록, 시작 시 한 번 읽은 값을
//! [`AppSettings`]로 보관하여 [`AppContext`](crate::core::context::AppContext) 생성에 사용합니다.

use crate::config::{
    FacebookOAuthConfig, GoogleOAuthConfig, OAuthConfig, OAuthProviderConfig, PasswordConfig,
    SessionConfig,
};

/// 시작 시점에 확정되는 설정값
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub bcrypt_cost: u32,
    pub session: SessionConfig,
    pub google: Option<OAuthProviderConfig>,
    pub facebook: Option<OAuthProviderConfig>,
    pub oauth_state_ttl_minutes: i64,
}

impl AppSettings {
    pub fn from_env() -> Self {
        let google = GoogleOAuthConfig::load();
        let facebook = FacebookOAuthConfig::load();

        if google.is_none() {
            log::warn!("GOOGLE_CLIENT_ID 미설정: Google 로그인이 비활성화됩니다");
        }
        if facebook.is_none() {
            log::warn!("FACEBOOK_APP_ID 미설정: Facebook 로그인이 비활성화됩니다");
        }

        Self {
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            session: SessionConfig::load(),
            google,
            facebook,
            oauth_state_ttl_minutes: OAuthConfig::state_ttl_minutes(),
        }
    }
}
