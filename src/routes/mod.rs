//! 라우트 설정 모듈
//!
//! 서버 렌더링 페이지, 인증 엔드포인트, 헬스체크를 등록합니다.
//!
//! # Routes
//!
//! | 경로 | 핸들러 |
//! |------|--------|
//! | `GET /` | [`pages::home`](handlers::pages::home) |
//! | `GET /secrets` | 공개 게시판 |
//! | `GET, POST /submit` | 비밀 제출 (세션 필요) |
//! | `GET, POST /register` | 로컬 가입 |
//! | `GET, POST /login` | 로컬 로그인 |
//! | `GET /logout` | 세션 무효화 |
//! | `GET /auth/{provider}` | OAuth 시작 |
//! | `GET /auth/{provider}/secrets` | OAuth 콜백 |
//! | `GET /health` | 헬스체크 |
//!
//! 세션 복원은 [`SessionMiddleware`](crate::middlewares::SessionMiddleware)가
//! `App` 전체에 적용되어 처리하므로 라우트별 인증 래핑은 없습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(context.clone())
//!     .wrap(SessionMiddleware::new())
//!     .configure(configure_all_routes)
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::secrets)
        .service(handlers::pages::submit_form)
        .service(handlers::pages::submit_secret);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    // 로컬 인증
    cfg.service(handlers::auth::register_form)
        .service(handlers::auth::register)
        .service(handlers::auth::login_form)
        .service(handlers::auth::login)
        .service(handlers::auth::logout);

    // OAuth (Google, Facebook)
    cfg.service(handlers::auth::oauth_begin)
        .service(handlers::auth::oauth_callback);
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_board",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::dev::ServiceResponse;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use async_trait::async_trait;

    use super::*;
    use crate::config::{AppSettings, OAuthProvider, OAuthProviderConfig, SessionConfig};
    use crate::core::AppContext;
    use crate::domain::models::oauth::ProviderProfile;
    use crate::errors::{AppError, AppResult};
    use crate::middlewares::SessionMiddleware;
    use crate::repositories::sessions::InMemorySessionRepository;
    use crate::repositories::users::{InMemoryUserRepository, UserStore};
    use crate::services::auth::{IdentityProviderClient, OAUTH_STATE_COOKIE};

    /// code 값을 그대로 프로바이더 사용자 ID로 돌려주는 클라이언트
    struct EchoProviderClient;

    #[async_trait]
    impl IdentityProviderClient for EchoProviderClient {
        async fn fetch_profile(
            &self,
            config: &OAuthProviderConfig,
            code: &str,
        ) -> AppResult<ProviderProfile> {
            if code == "unreachable" {
                return Err(AppError::OAuthFailed("connection refused".to_string()));
            }
            Ok(ProviderProfile {
                kind: config.provider,
                provider_id: code.to_string(),
                emails: vec![],
                display_name: None,
            })
        }
    }

    fn provider_config(provider: OAuthProvider) -> OAuthProviderConfig {
        OAuthProviderConfig {
            provider,
            client_id: format!("{}-client", provider),
            client_secret: "client-secret".to_string(),
            callback_url: format!("http://localhost:3000/auth/{}/secrets", provider),
            auth_uri: format!("https://{}.example.com/authorize", provider),
            token_uri: format!("https://{}.example.com/token", provider),
            profile_uri: format!("https://{}.example.com/me", provider),
            scope: "profile".to_string(),
        }
    }

    fn context(users: Arc<dyn UserStore>) -> web::Data<AppContext> {
        let settings = AppSettings {
            bcrypt_cost: 4,
            session: SessionConfig {
                secret: "route-test-secret".to_string(),
                ttl_hours: 1,
                cookie_name: SessionConfig::DEFAULT_COOKIE_NAME.to_string(),
                secure_cookie: false,
                redis_url: None,
            },
            google: Some(provider_config(OAuthProvider::Google)),
            facebook: Some(provider_config(OAuthProvider::Facebook)),
            oauth_state_ttl_minutes: 10,
        };

        let context = AppContext::new(
            settings,
            users,
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(EchoProviderClient),
        )
        .unwrap();

        web::Data::new(context)
    }

    macro_rules! app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .app_data($ctx.clone())
                    .wrap(SessionMiddleware::new())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn location<B>(resp: &ServiceResponse<B>) -> String {
        resp.headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    fn cookie<B>(resp: &ServiceResponse<B>, name: &str) -> Option<Cookie<'static>> {
        resp.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.into_owned())
    }

    async fn body(resp: ServiceResponse) -> String {
        let bytes = test::read_body(resp).await;
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn session_of<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
        cookie(resp, SessionConfig::DEFAULT_COOKIE_NAME).expect("session cookie")
    }

    #[actix_web::test]
    async fn test_health_check() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_public_pages_render() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        for uri in ["/", "/register", "/login", "/secrets"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_register_logs_in_and_rejects_duplicate() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);
        let form = [("username", "alice@example.com"), ("password", "pw")];

        let resp = test::call_service(
            &app,
            test::TestRequest::post().uri("/register").set_form(form).to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/secrets");
        let session = session_of(&resp);
        assert_eq!(session.http_only(), Some(true));

        let duplicate = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "alice@example.com"), ("password", "other")])
                .to_request(),
        )
        .await;
        assert_eq!(duplicate.status(), StatusCode::OK);
        assert!(body(duplicate).await.contains("Email already registered"));

        let login = test::call_service(
            &app,
            test::TestRequest::post().uri("/login").set_form(form).to_request(),
        )
        .await;
        assert_eq!(location(&login), "/secrets");
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_rerenders_form() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        ctx.users.register("bob@example.com", "right").await.unwrap();
        let app = app!(ctx);

        for password in ["wrong", ""] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/login")
                    .set_form([("username", "bob@example.com"), ("password", password)])
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), StatusCode::OK);
            assert!(cookie(&resp, SessionConfig::DEFAULT_COOKIE_NAME).is_none());
            assert!(body(resp).await.contains("Authentication failed"));
        }
    }

    #[actix_web::test]
    async fn test_submit_requires_session() {
        let store = Arc::new(InMemoryUserRepository::new());
        let ctx = context(store.clone());
        let app = app!(ctx);

        let get = test::call_service(&app, test::TestRequest::get().uri("/submit").to_request()).await;
        let html = body(get).await;
        assert!(html.contains("action=\"/login\""));
        assert!(html.contains("Authentication failed"));

        let post = test::call_service(
            &app,
            test::TestRequest::post().uri("/submit").set_form([("secret", "x")]).to_request(),
        )
        .await;
        assert_eq!(post.status(), StatusCode::OK);
        assert!(body(post).await.contains("action=\"/login\""));
        assert!(store.find_with_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_submit_appends_and_board_lists_only_users_with_secrets() {
        let store = Arc::new(InMemoryUserRepository::new());
        let ctx = context(store.clone());
        let app = app!(ctx);

        let quiet = ctx.users.register("quiet@example.com", "pw").await.unwrap();

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "talker@example.com"), ("password", "pw")])
                .to_request(),
        )
        .await;
        let session = session_of(&resp);

        let form_page = test::call_service(
            &app,
            test::TestRequest::get().uri("/submit").cookie(session.clone()).to_request(),
        )
        .await;
        assert!(body(form_page).await.contains("action=\"/submit\""));

        for secret in ["a", "b"] {
            let resp = test::call_service(
                &app,
                test::TestRequest::post()
                    .uri("/submit")
                    .cookie(session.clone())
                    .set_form([("secret", secret)])
                    .to_request(),
            )
            .await;
            assert_eq!(location(&resp), "/secrets");
        }

        let talker = store.find_by_username("talker@example.com").await.unwrap().unwrap();
        assert_eq!(talker.secrets, vec!["a", "b"]);

        let with_secrets = store.find_with_secrets().await.unwrap();
        assert_eq!(with_secrets.len(), 1);
        assert_ne!(with_secrets[0].id, quiet.id);

        let board = test::call_service(&app, test::TestRequest::get().uri("/secrets").to_request()).await;
        let html = body(board).await;
        assert!(html.contains(">a<"));
        assert!(html.contains(">b<"));
    }

    #[actix_web::test]
    async fn test_blank_secret_rerenders_submit_form() {
        let store = Arc::new(InMemoryUserRepository::new());
        let ctx = context(store.clone());
        let app = app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "carol@example.com"), ("password", "pw")])
                .to_request(),
        )
        .await;
        let session = session_of(&resp);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit")
                .cookie(session)
                .set_form([("secret", "   ")])
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body(resp).await.contains("Please enter a secret"));
        assert!(store.find_with_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_logout_then_submit_shows_login() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/register")
                .set_form([("username", "dave@example.com"), ("password", "pw")])
                .to_request(),
        )
        .await;
        let session = session_of(&resp);

        let logout = test::call_service(
            &app,
            test::TestRequest::get().uri("/logout").cookie(session.clone()).to_request(),
        )
        .await;
        assert_eq!(logout.status(), StatusCode::FOUND);
        assert_eq!(location(&logout), "/");
        assert_eq!(session_of(&logout).value(), "");

        // 이전 쿠키를 그대로 다시 보내도 로그아웃된 세션으로 취급
        let submit = test::call_service(
            &app,
            test::TestRequest::get().uri("/submit").cookie(session).to_request(),
        )
        .await;
        let html = body(submit).await;
        assert!(html.contains("action=\"/login\""));
        assert!(!html.contains("action=\"/submit\""));
    }

    #[actix_web::test]
    async fn test_logout_without_session_redirects_home() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/logout").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(location(&resp), "/");
    }

    /// 동의 화면 리다이렉트부터 콜백까지 한 번의 OAuth 흐름
    macro_rules! oauth_round_trip {
        ($app:expr, $provider:expr, $code:expr) => {{
            let begin = test::call_service(
                &$app,
                test::TestRequest::get().uri(&format!("/auth/{}", $provider)).to_request(),
            )
            .await;
            assert_eq!(begin.status(), StatusCode::FOUND);
            assert!(location(&begin)
                .starts_with(&format!("https://{}.example.com/authorize?", $provider)));

            let state = cookie(&begin, OAUTH_STATE_COOKIE).expect("state cookie");
            let uri = format!(
                "/auth/{}/secrets?code={}&state={}",
                $provider,
                $code,
                urlencoding::encode(state.value())
            );

            test::call_service(&$app, test::TestRequest::get().uri(&uri).cookie(state).to_request())
                .await
        }};
    }

    #[actix_web::test]
    async fn test_oauth_callback_is_idempotent_per_provider_id() {
        let store = Arc::new(InMemoryUserRepository::new());
        let ctx = context(store.clone());
        let app = app!(ctx);

        let first = oauth_round_trip!(app, "google", "P");
        assert_eq!(location(&first), "/secrets");
        let second = oauth_round_trip!(app, "google", "P");
        assert_eq!(location(&second), "/secrets");

        let first_user = ctx.sessions.deserialize(session_of(&first).value()).await.unwrap().unwrap();
        let second_user = ctx.sessions.deserialize(session_of(&second).value()).await.unwrap().unwrap();
        assert_eq!(first_user.user_id, second_user.user_id);

        let user = store
            .find_by_provider_id(OAuthProvider::Google, "P")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id_string(), Some(first_user.user_id));
        assert!(store.find_by_provider_id(OAuthProvider::Facebook, "P").await.unwrap().is_none());

        let facebook = oauth_round_trip!(app, "facebook", "P");
        let facebook_user = ctx.sessions.deserialize(session_of(&facebook).value()).await.unwrap().unwrap();
        assert_ne!(facebook_user.user_id, second_user.user_id);
    }

    #[actix_web::test]
    async fn test_oauth_failures_redirect_to_login() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        let failed = oauth_round_trip!(app, "facebook", "unreachable");
        assert_eq!(location(&failed), "/login?error=oauth_failed");
        assert!(cookie(&failed, SessionConfig::DEFAULT_COOKIE_NAME).is_none());

        let denied = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/auth/google/secrets?error=access_denied")
                .to_request(),
        )
        .await;
        assert_eq!(location(&denied), "/login?error=oauth_failed");

        let forged = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/auth/google/secrets?code=P&state=forged")
                .to_request(),
        )
        .await;
        assert_eq!(location(&forged), "/login?error=oauth_failed");

        let login = test::call_service(
            &app,
            test::TestRequest::get().uri("/login?error=oauth_failed").to_request(),
        )
        .await;
        assert!(body(login).await.contains("Authentication failed"));
    }

    #[actix_web::test]
    async fn test_unknown_provider_is_not_found() {
        let ctx = context(Arc::new(InMemoryUserRepository::new()));
        let app = app!(ctx);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/auth/twitter").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
