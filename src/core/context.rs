//! 애플리케이션 컨텍스트
//!
//! 요청 처리에 필요한 서비스와 뷰를 한 곳에 묶어 `web::Data`로 공유합니다.
//! 프로세스 전역 상태 없이, `main`이나 테스트가 저장소 구현을 골라 주입합니다.

use std::sync::Arc;

use crate::config::AppSettings;
use crate::errors::AppResult;
use crate::repositories::sessions::SessionRevocationStore;
use crate::repositories::users::UserStore;
use crate::services::auth::{IdentityProviderClient, OAuthService, OAuthStateSigner, SessionManager};
use crate::services::users::UserService;
use crate::views::{ProviderLinks, Views};

pub struct AppContext {
    pub users: UserService,
    pub oauth: OAuthService,
    pub sessions: SessionManager,
    pub views: Views,
}

impl AppContext {
    /// 설정과 저장소 구현으로 컨텍스트를 조립합니다.
    ///
    /// # Errors
    ///
    /// 템플릿 등록에 실패하면 `TemplateError`
    pub fn new(
        settings: AppSettings,
        users: Arc<dyn UserStore>,
        revocations: Arc<dyn SessionRevocationStore>,
        identity_client: Arc<dyn IdentityProviderClient>,
    ) -> AppResult<Self> {
        let views = Views::new(ProviderLinks {
            google: settings.google.is_some(),
            facebook: settings.facebook.is_some(),
        })?;

        let state = OAuthStateSigner::new(
            settings.session.secret.clone(),
            settings.oauth_state_ttl_minutes,
            settings.session.secure_cookie,
        );

        Ok(Self {
            users: UserService::new(users.clone(), settings.bcrypt_cost),
            oauth: OAuthService::new(
                users,
                identity_client,
                settings.google,
                settings.facebook,
                state,
            ),
            sessions: SessionManager::new(settings.session, revocations),
            views,
        })
    }
}
