//! # Redis 클라이언트 구현
//!
//! 로그아웃된 세션 ID처럼 만료 시간이 있는 작은 값을 저장하는 데 사용합니다.
//! 값은 Serde를 통해 JSON 문자열로 저장됩니다.
//!
//! 세션 미들웨어가 쿠키가 있는 모든 요청에서 조회하므로 연결은 시작 시 한 번 만든
//! [`ConnectionManager`]를 공유합니다. 끊긴 연결은 매니저가 자동으로 다시 맺습니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::Serialize;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Redis 서버에 연결하고 `PING`으로 가용성을 확인합니다.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut manager = ConnectionManager::new(client).await?;
        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: u64,
    ) -> Result<(), redis::RedisError> {
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;
        let mut conn = self.manager.clone();
        conn.set_ex(key, json, seconds).await
    }

    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.exists(key).await
    }
}
