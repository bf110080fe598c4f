//! 세션 로그아웃 기록 리포지토리
//!
//! 세션 토큰은 서버에 저장하지 않으므로, 로그아웃된 세션의 `jti`만
//! 토큰 만료 시각까지 기록합니다. 기록이 있는 세션은 더 이상 인증되지 않습니다.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::caching::redis::RedisClient;
use crate::domain::models::session::RevokedSession;
use crate::errors::{AppError, AppResult};

#[async_trait]
pub trait SessionRevocationStore: Send + Sync {
    /// 세션을 `ttl_seconds` 동안 로그아웃 상태로 기록합니다.
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> AppResult<()>;

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool>;
}

/// Redis 기반 구현
///
/// - **키 패턴**: `revoked_session:{jti}`
/// - **TTL**: 원래 토큰의 남은 유효 시간
pub struct RedisSessionRepository {
    redis: Arc<RedisClient>,
}

impl RedisSessionRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn key(session_id: &str) -> String {
        format!("revoked_session:{}", session_id)
    }
}

#[async_trait]
impl SessionRevocationStore for RedisSessionRepository {
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> AppResult<()> {
        let record = RevokedSession {
            session_id: session_id.to_string(),
            revoked_at: Utc::now().timestamp(),
        };

        // SETEX는 0초를 허용하지 않음
        self.redis
            .set_with_expiry(&Self::key(session_id), &record, ttl_seconds.max(1))
            .await?;

        log::debug!("세션 로그아웃 기록 - 세션: {}, TTL: {}초", session_id, ttl_seconds);
        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&Self::key(session_id)).await?)
    }
}

/// 메모리 기반 구현
///
/// `REDIS_URL`이 없을 때 사용합니다. 세션 ID별 만료 시각(Unix timestamp)을 보관합니다.
#[derive(Default)]
pub struct InMemorySessionRepository {
    revoked: Mutex<HashMap<String, i64>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRevocationStore for InMemorySessionRepository {
    async fn revoke(&self, session_id: &str, ttl_seconds: u64) -> AppResult<()> {
        let now = Utc::now().timestamp();
        let mut revoked = self
            .revoked
            .lock()
            .map_err(|_| AppError::InternalError("세션 저장소 잠금 실패".to_string()))?;

        // 만료된 기록 정리
        revoked.retain(|_, expires_at| *expires_at > now);
        revoked.insert(session_id.to_string(), now + ttl_seconds as i64);

        Ok(())
    }

    async fn is_revoked(&self, session_id: &str) -> AppResult<bool> {
        let now = Utc::now().timestamp();
        let revoked = self
            .revoked
            .lock()
            .map_err(|_| AppError::InternalError("세션 저장소 잠금 실패".to_string()))?;

        Ok(revoked
            .get(session_id)
            .is_some_and(|expires_at| *expires_at > now))
    }
}
