//! 세션 토큰 클레임
//!
//! 세션에는 사용자 ID만 저장합니다. 프로필, 비밀, 비밀번호 해시는 포함하지 않습니다.
use serde::{Deserialize, Serialize};

/// HS256 세션 토큰의 Payload
///
/// - `sub`: 사용자 ID
/// - `jti`: 세션 ID (로그아웃 기록 키)
/// - `iat` / `exp`: 발급/만료 시각 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 로그아웃 처리된 세션 기록
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedSession {
    pub session_id: String,
    pub revoked_at: i64,
}
