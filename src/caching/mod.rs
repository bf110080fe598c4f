//! 캐싱/임시 저장소 모듈
//!
//! [`RedisClient`](redis::RedisClient)는 로그아웃된 세션 기록에 사용됩니다.

pub mod redis;
