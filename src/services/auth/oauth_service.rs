//! # OAuth 2.0 인증 서비스
//!
//! Google과 Facebook의 Authorization Code Flow를 같은 구조로 처리합니다.
//!
//! ```text
//! GET /auth/{provider}            → state 발급, 동의 화면으로 302
//! GET /auth/{provider}/secrets    → state 검증 → code 교환 → 프로필 조회
//!                                 → ProviderProfile 정규화 → find-or-create
//! ```
//!
//! ## 사용하는 엔드포인트
//!
//! | 프로바이더 | 토큰 교환 | 프로필 |
//! |------|------------|--------|
//! | Google | `POST https://oauth2.googleapis.com/token` | `GET https://www.googleapis.com/oauth2/v2/userinfo` |
//! | Facebook | `GET https://graph.facebook.com/v18.0/oauth/access_token` | `GET https://graph.facebook.com/me` |
//!
//! ## 계정 정책
//!
//! 프로바이더 ID로만 사용자를 찾습니다. 처음 보는 ID면 해당 ID만 가진
//! 사용자를 만들고, 프로필의 이메일이나 이름은 저장하지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{OAuthProvider, OAuthProviderConfig};
use crate::domain::dto::oauth::{AuthorizationRedirect, OAuthCallbackQuery, ProviderTokenResponse};
use crate::domain::entities::users::user::User;
use crate::domain::models::oauth::{FacebookUserInfo, GoogleUserInfo, ProviderProfile};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::oauth_state::OAuthStateSigner;

/// 외부 프로바이더와의 통신 추상화
///
/// Authorization code를 액세스 토큰으로 교환하고 프로필을 정규화하여 반환합니다.
/// 모든 실패는 [`AppError::OAuthFailed`]입니다.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    async fn fetch_profile(
        &self,
        config: &OAuthProviderConfig,
        code: &str,
    ) -> AppResult<ProviderProfile>;
}

/// reqwest 기반 구현
pub struct HttpIdentityProviderClient {
    http: reqwest::Client,
}

impl HttpIdentityProviderClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new() -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { http })
    }

    async fn exchange_code(
        &self,
        config: &OAuthProviderConfig,
        code: &str,
    ) -> AppResult<ProviderTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("redirect_uri", config.callback_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        // Google은 form POST, Facebook Graph는 쿼리스트링 GET
        let request = match config.provider {
            OAuthProvider::Google => self.http.post(&config.token_uri).form(&params),
            OAuthProvider::Facebook => self.http.get(&config.token_uri).query(&params),
        };

        let response = request.send().await.map_err(|e| {
            AppError::OAuthFailed(format!("{} 토큰 요청 실패: {}", config.provider, e))
        })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::OAuthFailed(format!(
                "{} 토큰 교환 실패: {}",
                config.provider, error_text
            )));
        }

        response.json::<ProviderTokenResponse>().await.map_err(|e| {
            AppError::OAuthFailed(format!("{} 토큰 응답 파싱 실패: {}", config.provider, e))
        })
    }

    async fn get_profile<T>(&self, config: &OAuthProviderConfig, access_token: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let request = match config.provider {
            OAuthProvider::Google => self.http.get(&config.profile_uri).bearer_auth(access_token),
            OAuthProvider::Facebook => self
                .http
                .get(&config.profile_uri)
                .query(&[("access_token", access_token)]),
        };

        let response = request.send().await.map_err(|e| {
            AppError::OAuthFailed(format!("{} 사용자 정보 요청 실패: {}", config.provider, e))
        })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::OAuthFailed(format!(
                "{} 사용자 정보 조회 실패: {}",
                config.provider, error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::OAuthFailed(format!("{} 사용자 정보 파싱 실패: {}", config.provider, e))
        })
    }
}

#[async_trait]
impl IdentityProviderClient for HttpIdentityProviderClient {
    async fn fetch_profile(
        &self,
        config: &OAuthProviderConfig,
        code: &str,
    ) -> AppResult<ProviderProfile> {
        let token = self.exchange_code(config, code).await?;

        let profile: ProviderProfile = match config.provider {
            OAuthProvider::Google => self
                .get_profile::<GoogleUserInfo>(config, &token.access_token)
                .await?
                .into(),
            OAuthProvider::Facebook => self
                .get_profile::<FacebookUserInfo>(config, &token.access_token)
                .await?
                .into(),
        };

        Ok(profile)
    }
}

/// OAuth 브리지
pub struct OAuthService {
    users: Arc<dyn UserStore>,
    client: Arc<dyn IdentityProviderClient>,
    google: Option<OAuthProviderConfig>,
    facebook: Option<OAuthProviderConfig>,
    state: OAuthStateSigner,
}

impl OAuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        client: Arc<dyn IdentityProviderClient>,
        google: Option<OAuthProviderConfig>,
        facebook: Option<OAuthProviderConfig>,
        state: OAuthStateSigner,
    ) -> Self {
        Self {
            users,
            client,
            google,
            facebook,
            state,
        }
    }

    pub fn state_signer(&self) -> &OAuthStateSigner {
        &self.state
    }

    fn provider_config(&self, provider: OAuthProvider) -> AppResult<&OAuthProviderConfig> {
        let config = match provider {
            OAuthProvider::Google => self.google.as_ref(),
            OAuthProvider::Facebook => self.facebook.as_ref(),
        };

        config.ok_or_else(|| AppError::OAuthFailed(format!("{} 로그인이 설정되지 않았습니다", provider)))
    }

    /// 프로바이더 동의 화면 URL과 state 생성
    pub fn begin_auth(&self, provider: OAuthProvider) -> AppResult<AuthorizationRedirect> {
        let config = self.provider_config(provider)?;
        let state = self.state.issue();

        let params = [
            ("client_id", config.client_id.as_str()),
            ("redirect_uri", config.callback_url.as_str()),
            ("scope", config.scope.as_str()),
            ("response_type", "code"),
            ("state", state.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        Ok(AuthorizationRedirect {
            url: format!("{}?{}", config.auth_uri, query_string),
            state,
        })
    }

    /// 콜백 처리 후 사용자 반환
    ///
    /// # Errors
    ///
    /// * `OAuthFailed` - 동의 거부, state 불일치, code 누락, 프로바이더 통신 실패
    /// * `StoreUnavailable` - 사용자 저장소 실패
    pub async fn complete_auth(
        &self,
        provider: OAuthProvider,
        query: &OAuthCallbackQuery,
        cookie_state: Option<&str>,
    ) -> AppResult<User> {
        if let Some(error) = &query.error {
            return Err(AppError::OAuthFailed(format!(
                "{} 인증 거부: {} {}",
                provider,
                error,
                query.error_description.as_deref().unwrap_or_default()
            )));
        }

        let config = self.provider_config(provider)?;
        self.state.verify(query.state.as_deref(), cookie_state)?;

        let code = query
            .code
            .as_deref()
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::OAuthFailed("authorization code 누락".to_string()))?;

        let profile = self.client.fetch_profile(config, code).await?;
        if profile.kind != provider {
            return Err(AppError::OAuthFailed(format!(
                "{} 콜백에 {} 프로필이 전달되었습니다",
                provider, profile.kind
            )));
        }

        self.find_or_create(&profile).await
    }

    /// 프로바이더 ID로 사용자를 찾고, 없으면 생성합니다.
    ///
    /// 동시 콜백이 같은 ID를 먼저 저장한 경우 유니크 인덱스 충돌이 나므로 다시 조회합니다.
    pub async fn find_or_create(&self, profile: &ProviderProfile) -> AppResult<User> {
        if let Some(user) = self
            .users
            .find_by_provider_id(profile.kind, &profile.provider_id)
            .await?
        {
            log::info!("{} 사용자 로그인: {}", profile.kind, profile.provider_id);
            return Ok(user);
        }

        match self.users.create(User::new_oauth(profile)).await {
            Ok(user) => {
                log::info!(
                    "새 {} 사용자 등록: {} ({})",
                    profile.kind,
                    profile.provider_id,
                    profile.derived_username().unwrap_or("-")
                );
                Ok(user)
            }
            Err(AppError::Conflict(_)) => self
                .users
                .find_by_provider_id(profile.kind, &profile.provider_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError("중복 키 충돌 후 사용자를 찾을 수 없습니다".to_string())
                }),
            Err(e) => Err(e),
        }
    }
}
