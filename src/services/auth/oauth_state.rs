//! OAuth `state` 매개변수 서명/검증
//!
//! 서버에 상태를 저장하지 않고 CSRF를 막기 위해 `nonce.timestamp.signature`
//! 형식의 값을 발급합니다. 서명은 `SHA-256(secret:nonce:timestamp)`의 hex 값입니다.
//! 같은 값을 짧은 수명의 `oauth_state` 쿠키에도 저장하여, 콜백을 시작한
//! 브라우저와 돌아온 브라우저가 같은지 확인합니다.

use actix_web::cookie::{time, Cookie, SameSite};
use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

pub const OAUTH_STATE_COOKIE: &str = "oauth_state";

/// 시계 오차 허용치 (초)
const CLOCK_SKEW_SECONDS: i64 = 30;

#[derive(Debug, Clone)]
pub struct OAuthStateSigner {
    secret: String,
    ttl_minutes: i64,
    secure_cookie: bool,
}

impl OAuthStateSigner {
    pub fn new(secret: String, ttl_minutes: i64, secure_cookie: bool) -> Self {
        Self {
            secret,
            ttl_minutes,
            secure_cookie,
        }
    }

    pub fn issue(&self) -> String {
        self.issue_at(Utc::now().timestamp())
    }

    fn issue_at(&self, timestamp: i64) -> String {
        let nonce = Uuid::new_v4().simple().to_string();
        let signature = self.signature(&nonce, timestamp);
        format!("{}.{}.{}", nonce, timestamp, signature)
    }

    /// 콜백의 `state`와 쿠키 값을 검증합니다.
    ///
    /// 쿠키 불일치, 형식 오류, 서명 불일치, 만료는 모두 `OAuthFailed`입니다.
    pub fn verify(&self, state: Option<&str>, cookie_state: Option<&str>) -> AppResult<()> {
        self.verify_at(state, cookie_state, Utc::now().timestamp())
    }

    fn verify_at(&self, state: Option<&str>, cookie_state: Option<&str>, now: i64) -> AppResult<()> {
        let state = state.ok_or_else(|| AppError::OAuthFailed("state 누락".to_string()))?;

        if cookie_state != Some(state) {
            return Err(AppError::OAuthFailed("state 쿠키 불일치".to_string()));
        }

        let mut parts = state.splitn(3, '.');
        let (Some(nonce), Some(timestamp), Some(signature)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(AppError::OAuthFailed("state 형식 오류".to_string()));
        };

        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| AppError::OAuthFailed("state 형식 오류".to_string()))?;

        if !constant_time_eq(self.signature(nonce, timestamp).as_bytes(), signature.as_bytes()) {
            return Err(AppError::OAuthFailed("state 서명 불일치".to_string()));
        }

        let age = now - timestamp;
        if age > self.ttl_minutes * 60 || age < -CLOCK_SKEW_SECONDS {
            return Err(AppError::OAuthFailed("state 만료".to_string()));
        }

        Ok(())
    }

    fn signature(&self, nonce: &str, timestamp: i64) -> String {
        let digest = Sha256::digest(format!("{}:{}:{}", self.secret, nonce, timestamp).as_bytes());
        format!("{:x}", digest)
    }

    pub fn cookie(&self, state: &str) -> Cookie<'static> {
        Cookie::build(OAUTH_STATE_COOKIE, state.to_string())
            .path("/auth")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure_cookie)
            .max_age(time::Duration::minutes(self.ttl_minutes))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(OAUTH_STATE_COOKIE, "").path("/auth").finish();
        cookie.make_removal();
        cookie
    }
}

/// 길이가 같으면 모든 바이트를 비교하는 상수 시간 비교
fn constant_time_eq(expected: &[u8], actual: &[u8]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
