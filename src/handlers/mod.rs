//! # HTTP Request Handlers Module
//!
//! 서버 렌더링 페이지와 인증 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser
//! └─────────────────────┬───────────────────────┘
//!                       │ HTML form / redirect
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) + Views                    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 가입/인증/OAuth/세션               ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - UserStore, 세션 기록           ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 인증 실패는 폼 재렌더링이나 `/login?error=oauth_failed` 리다이렉트로 복구합니다.
//! 그 외의 [`AppError`](crate::errors::AppError)는 그대로 반환되어 에러 페이지가 됩니다.
//!
//! ## 모듈 구성
//!
//! - [`pages`] - `/`, `/secrets`, `/submit`
//! - [`auth`] - `/register`, `/login`, `/logout`, `/auth/{provider}`

use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;

pub mod pages;
pub mod auth;

/// 로그인 필요 페이지에 비로그인으로 접근했을 때의 메시지
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed";

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::html())
        .body(body)
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
