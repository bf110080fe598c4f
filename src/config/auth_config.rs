//! # Authentication Configuration Module
//!
//! OAuth 프로바이더, 세션 서명, OAuth state 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 세션
//! ```bash
//! export SECRET="your-session-signing-secret"
//! export SESSION_TTL_HOURS="24"
//! export REDIS_URL="redis://localhost:6379"   # 선택: 로그아웃된 세션 저장소
//! ```
//!
//! ### Google OAuth
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_CALLBACK_URL="http://localhost:3000/auth/google/secrets"
//! ```
//!
//! ### Facebook OAuth
//! ```bash
//! export FACEBOOK_APP_ID="your-facebook-app-id"
//! export FACEBOOK_APP_SECRET="your-facebook-app-secret"
//! export FACEBOOK_CALLBACK_URL="http://localhost:3000/auth/facebook/secrets"
//! ```
//!
//! 클라이언트 ID가 설정되지 않은 프로바이더는 비활성화되며,
//! 해당 프로바이더로의 로그인 시도는 `OAuthFailed`로 처리됩니다.

use std::env;
use std::fmt;

use crate::config::Environment;

/// 지원하는 외부 OAuth 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum OAuthProvider {
    /// Google OAuth 2.0
    Google,
    /// Facebook Login (Graph API)
    Facebook,
}

impl OAuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "facebook" => Ok(OAuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Facebook => "facebook",
        }
    }

    /// 사용자 문서에서 프로바이더 ID가 저장되는 필드 이름
    pub fn id_field(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "googleId",
            OAuthProvider::Facebook => "facebookId",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 단일 OAuth 프로바이더의 클라이언트 설정
#[derive(Debug, Clone)]
pub struct OAuthProviderConfig {
    pub provider: OAuthProvider,
    pub client_id: String,
    pub client_secret: String,
    /// 프로바이더 콘솔에 등록된 콜백 URL
    pub callback_url: String,
    /// 동의 화면 URL
    pub auth_uri: String,
    /// Authorization code → access token 교환 URL
    pub token_uri: String,
    /// 프로필 조회 URL
    pub profile_uri: String,
    /// 공백으로 구분된 OAuth 스코프
    pub scope: String,
}

/// Google OAuth 2.0 설정
///
/// `https://accounts.google.com/o/oauth2/v2/auth` 동의 화면과
/// `oauth2/v2/userinfo` 프로필 API를 사용합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// 환경 변수에서 Google 설정을 읽습니다.
    ///
    /// `GOOGLE_CLIENT_ID`가 없으면 `None`을 반환하여 프로바이더를 비활성화합니다.
    pub fn load() -> Option<OAuthProviderConfig> {
        let client_id = non_empty_var("GOOGLE_CLIENT_ID")?;

        Some(OAuthProviderConfig {
            provider: OAuthProvider::Google,
            client_id,
            client_secret: env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            callback_url: env::var("GOOGLE_CALLBACK_URL")
                .unwrap_or_else(|_| "http://localhost:3000/auth/google/secrets".to_string()),
            auth_uri: env::var("GOOGLE_AUTH_URI")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string()),
            token_uri: env::var("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            profile_uri: "https://www.googleapis.com/oauth2/v2/userinfo".to_string(),
            scope: env::var("GOOGLE_SCOPE").unwrap_or_else(|_| "profile".to_string()),
        })
    }
}

/// Facebook Login 설정 (Graph API v18.0)
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    /// 환경 변수에서 Facebook 설정을 읽습니다.
    ///
    /// `FACEBOOK_APP_ID`가 없으면 `None`을 반환하여 프로바이더를 비활성화합니다.
    pub fn load() -> Option<OAuthProviderConfig> {
        let client_id = non_empty_var("FACEBOOK_APP_ID")?;

        Some(OAuthProviderConfig {
            provider: OAuthProvider::Facebook,
            client_id,
            client_secret: env::var("FACEBOOK_APP_SECRET").unwrap_or_default(),
            callback_url: env::var("FACEBOOK_CALLBACK_URL")
                .unwrap_or_else(|_| "http://localhost:3000/auth/facebook/secrets".to_string()),
            auth_uri: "https://www.facebook.com/v18.0/dialog/oauth".to_string(),
            token_uri: "https://graph.facebook.com/v18.0/oauth/access_token".to_string(),
            profile_uri: "https://graph.facebook.com/me?fields=id,name,email".to_string(),
            scope: env::var("FACEBOOK_SCOPE").unwrap_or_else(|_| "public_profile".to_string()),
        })
    }
}

/// 세션 토큰 및 쿠키 설정
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// 세션 토큰 서명 시크릿
    pub secret: String,
    /// 세션 유효 시간 (시간 단위)
    pub ttl_hours: i64,
    /// 세션 쿠키 이름
    pub cookie_name: String,
    /// 쿠키 `Secure` 속성
    pub secure_cookie: bool,
    /// 로그아웃 처리된 세션을 기록할 Redis URL (없으면 메모리 사용)
    pub redis_url: Option<String>,
}

impl SessionConfig {
    pub const DEFAULT_COOKIE_NAME: &'static str = "secrets.sid";

    pub fn load() -> Self {
        let secret = non_empty_var("SECRET").unwrap_or_else(|| {
            log::warn!("SECRET not set, using default (not secure for production!)");
            "secrets-board-dev-secret".to_string()
        });

        let ttl_hours = env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        Self {
            secret,
            ttl_hours,
            cookie_name: Self::DEFAULT_COOKIE_NAME.to_string(),
            secure_cookie: Environment::current().requires_secure_cookies(),
            redis_url: non_empty_var("REDIS_URL"),
        }
    }
}

/// OAuth state 매개변수 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// state 값의 유효 시간 (분). 기본값: 10
    pub fn state_ttl_minutes() -> i64 {
        env::var("OAUTH_STATE_TTL_MINUTES")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
