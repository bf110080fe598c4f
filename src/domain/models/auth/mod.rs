//! 요청 단위 인증 정보 모델

pub mod authenticated_user;

pub use authenticated_user::*;
