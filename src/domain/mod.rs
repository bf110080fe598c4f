//! # Domain Layer
//!
//! - [`entities`] - MongoDB에 저장되는 [`User`](entities::users::user::User)
//! - [`models`] - 프로바이더 프로필, 세션 클레임 등 비영속 모델
//! - [`dto`] - 폼/쿼리/외부 응답 매핑

pub mod entities;
pub mod dto;
pub mod models;
