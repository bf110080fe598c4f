//! 세션 로그아웃 기록 리포지토리 모듈
//!
//! Redis가 설정되어 있으면 [`RedisSessionRepository`](session_repo::RedisSessionRepository),
//! 아니면 [`InMemorySessionRepository`](session_repo::InMemorySessionRepository)를 사용합니다.

pub mod session_repo;

pub use session_repo::*;
