//! 비밀 게시판 페이지 핸들러
use actix_web::{get, post, web, HttpResponse};

use crate::core::AppContext;
use crate::domain::dto::forms::SubmitForm;
use crate::domain::models::auth::OptionalUser;
use crate::errors::AppError;
use crate::handlers::{html, redirect, AUTH_FAILED_MESSAGE};

#[get("/")]
pub async fn home(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    Ok(html(ctx.views.home()?))
}

/// 공개 게시판: 비밀이 있는 모든 사용자의 비밀 목록
#[get("/secrets")]
pub async fn secrets(
    ctx: web::Data<AppContext>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    let secrets = ctx.users.list_secrets().await?;

    Ok(html(ctx.views.secrets(&secrets, user.is_authenticated())?))
}

#[get("/submit")]
pub async fn submit_form(
    ctx: web::Data<AppContext>,
    user: OptionalUser,
) -> Result<HttpResponse, AppError> {
    if !user.is_authenticated() {
        return Ok(html(ctx.views.login(Some(AUTH_FAILED_MESSAGE), None)?));
    }

    Ok(html(ctx.views.submit(None, None)?))
}

#[post("/submit")]
pub async fn submit_secret(
    ctx: web::Data<AppContext>,
    user: OptionalUser,
    form: web::Form<SubmitForm>,
) -> Result<HttpResponse, AppError> {
    let Some(session) = user.0 else {
        log::info!("비로그인 상태의 비밀 제출 거부");
        return Ok(html(ctx.views.login(Some(AUTH_FAILED_MESSAGE), None)?));
    };

    match ctx.users.submit_secret(&session.user_id, &form.secret).await {
        Ok(_) => Ok(redirect("/secrets")),
        Err(AppError::ValidationError(_)) => Ok(html(
            ctx.views.submit(Some("Please enter a secret"), Some(&form.secret))?,
        )),
        Err(e) => Err(e),
    }
}
