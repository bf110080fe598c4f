//! OAuth 플로우 DTO
//!
//! 콜백 쿼리와 프로바이더 토큰 응답을 정의합니다.

use serde::{Deserialize, Serialize};

/// OAuth 콜백 쿼리 파라미터 (`GET /auth/{provider}/secrets`)
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달됩니다.
#[derive(Debug, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Authorization code 교환 응답
///
/// Google과 Facebook 모두 `access_token`을 최상위 필드로 반환합니다.
#[derive(Debug, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// 동의 화면 리다이렉트 정보
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationRedirect {
    /// 브라우저를 보낼 프로바이더 동의 화면 URL
    pub url: String,
    /// CSRF 방지용 state (쿠키에도 저장됨)
    pub state: String,
}
