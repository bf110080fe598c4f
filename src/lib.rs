//! 비밀 게시판 (Secrets Board)
//!
//! 사용자가 익명으로 비밀을 남기고 모두가 읽을 수 있는 서버 렌더링 웹 애플리케이션입니다.
//! 로컬 계정(사용자명/비밀번호)과 Google, Facebook OAuth 로그인을 지원합니다.
//!
//! # Features
//!
//! - **로컬 계정**: bcrypt 해시 기반 가입/로그인
//! - **OAuth 2.0**: Google, Facebook 소셜 로그인 (프로바이더 ID 기준 find-or-create)
//! - **세션**: HS256 서명 쿠키, Redis 기반 로그아웃 기록
//! - **MongoDB**: 사용자 문서 영구 저장
//! - **Handlebars**: 서버 렌더링 뷰
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지/인증 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers + Views│ ← 폼 처리, 템플릿 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 가입/인증, OAuth 브리지, 세션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore, SessionRevocationStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소 (또는 메모리 구현)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_board::core::AppContext;
//!
//! let context = AppContext::new(settings, users, revocations, identity_client)?;
//! let user = context.users.register("alice", "password").await?;
//! let token = context.sessions.serialize(&user)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod views;
