//! Authentication HTTP Handlers
//!
//! 로컬 가입/로그인, 로그아웃, OAuth 2.0 시작/콜백 엔드포인트입니다.
//! 인증에 성공하면 세션 쿠키를 설정하고 `/secrets`로 리다이렉트합니다.
//!
//! # Auth Providers
//!
//! - **로컬 인증**: 사용자명/비밀번호 (`POST /register`, `POST /login`)
//! - **OAuth 2.0**: `GET /auth/{google|facebook}`, 콜백 `GET /auth/{provider}/secrets`
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::config::OAuthProvider;
use crate::core::AppContext;
use crate::domain::dto::forms::{LoginForm, LoginPageQuery, RegisterForm};
use crate::domain::dto::oauth::OAuthCallbackQuery;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::OptionalUser;
use crate::errors::{AppError, ErrorContext};
use crate::handlers::{html, redirect, AUTH_FAILED_MESSAGE};
use crate::services::auth::OAUTH_STATE_COOKIE;
use crate::utils::string_utils::first_validation_message;

const DUPLICATE_USERNAME_MESSAGE: &str = "Email already registered";
const OAUTH_FAILED_REDIRECT: &str = "/login?error=oauth_failed";

/// 세션 토큰을 발급하고 `/secrets`로 보내는 응답
fn establish_session(ctx: &AppContext, user: &User) -> Result<HttpResponse, AppError> {
    let token = ctx.sessions.serialize(user)?;

    Ok(HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/secrets"))
        .cookie(ctx.sessions.session_cookie(token))
        .finish())
}

fn parse_provider(provider: &str) -> Result<OAuthProvider, AppError> {
    OAuthProvider::from_str(provider).map_err(AppError::NotFound)
}

#[get("/register")]
pub async fn register_form(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    Ok(html(ctx.views.register(None, None)?))
}

#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    if let Err(errors) = form.validate() {
        let message = first_validation_message(&errors);
        return Ok(html(ctx.views.register(Some(&message), Some(&form.username))?));
    }

    match ctx.users.register(&form.username, &form.password).await {
        Ok(user) => {
            log::info!("가입 및 자동 로그인: {}", form.username.trim());
            establish_session(&ctx, &user)
        }
        Err(AppError::DuplicateUsername) => Ok(html(
            ctx.views.register(Some(DUPLICATE_USERNAME_MESSAGE), Some(&form.username))?,
        )),
        Err(AppError::ValidationError(message)) => {
            Ok(html(ctx.views.register(Some(&message), Some(&form.username))?))
        }
        Err(e) => Err(e),
    }
}

#[get("/login")]
pub async fn login_form(
    ctx: web::Data<AppContext>,
    query: web::Query<LoginPageQuery>,
) -> Result<HttpResponse, AppError> {
    let error = query.error.as_ref().map(|_| AUTH_FAILED_MESSAGE);

    Ok(html(ctx.views.login(error, None)?))
}

#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    if form.validate().is_err() {
        return Ok(html(ctx.views.login(Some(AUTH_FAILED_MESSAGE), Some(&form.username))?));
    }

    match ctx.users.verify(&form.username, &form.password).await {
        Ok(user) => {
            log::info!("로컬 로그인 성공: {}", form.username.trim());
            establish_session(&ctx, &user)
        }
        Err(AppError::InvalidCredentials) => {
            Ok(html(ctx.views.login(Some(AUTH_FAILED_MESSAGE), Some(&form.username))?))
        }
        Err(e) => Err(e),
    }
}

/// 로그아웃은 항상 성공하고 `/`로 리다이렉트합니다.
#[get("/logout")]
pub async fn logout(ctx: web::Data<AppContext>, user: OptionalUser) -> HttpResponse {
    ctx.sessions.logout(user.0.as_ref()).await;

    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(ctx.sessions.removal_cookie())
        .finish()
}

#[get("/auth/{provider}")]
pub async fn oauth_begin(
    ctx: web::Data<AppContext>,
    provider: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;

    match ctx.oauth.begin_auth(provider) {
        Ok(authorization) => Ok(HttpResponse::Found()
            .insert_header((actix_web::http::header::LOCATION, authorization.url.as_str()))
            .cookie(ctx.oauth.state_signer().cookie(&authorization.state))
            .finish()),
        Err(e) if e.is_auth_failure() => {
            log::warn!("OAuth 시작 실패: {}", e);
            Ok(redirect(OAUTH_FAILED_REDIRECT))
        }
        Err(e) => Err(e),
    }
}

#[get("/auth/{provider}/secrets")]
pub async fn oauth_callback(
    req: HttpRequest,
    ctx: web::Data<AppContext>,
    provider: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let provider = parse_provider(&provider)?;
    let cookie_state = req.cookie(OAUTH_STATE_COOKIE).map(|c| c.value().to_string());

    let result = ctx
        .oauth
        .complete_auth(provider, &query, cookie_state.as_deref())
        .await;

    let mut response = match result {
        Ok(user) => establish_session(&ctx, &user)?,
        Err(e) if e.is_auth_failure() => {
            log::warn!("{} OAuth 콜백 실패: {}", provider, e);
            redirect(OAUTH_FAILED_REDIRECT)
        }
        Err(e) => return Err(e),
    };

    response
        .add_cookie(&ctx.oauth.state_signer().removal_cookie())
        .context("쿠키 설정 실패")?;

    Ok(response)
}
