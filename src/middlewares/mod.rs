//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - `secrets.sid` 쿠키의 세션 토큰 검증
//! - 로그아웃된 세션 거부
//! - 사용자 식별 정보를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::SessionMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(context))
//!     .wrap(SessionMiddleware::new())
//!     .configure(configure_all_routes)
//! ```
//!
//! 핸들러에서는 [`OptionalUser`](crate::domain::models::auth::OptionalUser) 추출자로 읽습니다.

pub mod session_middleware;
mod session_inner;

pub use session_middleware::SessionMiddleware;
