//! 세션 관리 서비스
//!
//! 인증에 성공한 사용자에게 HS256 서명 세션 토큰을 발급하고, 이후 요청에서
//! 토큰으로부터 사용자 식별 정보를 복원합니다.
//!
//! 토큰에는 사용자 ID(`sub`)와 세션 ID(`jti`)만 들어갑니다. 로그아웃은
//! `jti`를 [`SessionRevocationStore`]에 토큰 만료 시각까지 기록하는 방식입니다.

use std::sync::Arc;

use actix_web::cookie::{time, Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::session::SessionClaims;
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionRevocationStore;

pub struct SessionManager {
    config: SessionConfig,
    revocations: Arc<dyn SessionRevocationStore>,
}

impl SessionManager {
    pub fn new(config: SessionConfig, revocations: Arc<dyn SessionRevocationStore>) -> Self {
        Self { config, revocations }
    }

    /// 만료 시각을 여유 없이 검사하는 HS256 검증 설정
    fn validation() -> Validation {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    /// 사용자 ID만 담은 세션 토큰 발급
    pub fn serialize(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.config.ttl_hours);

        let claims = SessionClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::SessionError("사용자 ID가 없습니다".to_string()))?,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::SessionError(format!("세션 토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰에서 식별 정보 복원
    ///
    /// 서명 불일치, 만료, 로그아웃된 토큰은 `Ok(None)`입니다.
    /// 사용자 문서는 조회하지 않습니다.
    ///
    /// # Errors
    ///
    /// 로그아웃 기록 저장소에 접근할 수 없으면 `StoreUnavailable`
    pub async fn deserialize(&self, token: &str) -> AppResult<Option<AuthenticatedUser>> {
        let decoding_key = DecodingKey::from_secret(self.config.secret.as_ref());

        let claims = match decode::<SessionClaims>(token, &decoding_key, &Self::validation()) {
            Ok(data) => data.claims,
            Err(e) => {
                log::debug!("세션 토큰 거부: {}", e);
                return Ok(None);
            }
        };

        if self.revocations.is_revoked(&claims.jti).await? {
            log::debug!("로그아웃된 세션: {}", claims.jti);
            return Ok(None);
        }

        Ok(Some(AuthenticatedUser {
            user_id: claims.sub,
            session_id: claims.jti,
            expires_at: claims.exp,
        }))
    }

    /// 현재 세션 무효화
    ///
    /// 실패해도 에러를 반환하지 않습니다. 호출자는 항상 쿠키를 제거하고 리다이렉트합니다.
    pub async fn logout(&self, session: Option<&AuthenticatedUser>) {
        let Some(session) = session else {
            return;
        };

        let remaining = (session.expires_at - Utc::now().timestamp()).max(0) as u64;

        match self.revocations.revoke(&session.session_id, remaining).await {
            Ok(()) => log::info!("로그아웃 - 사용자: {}", session.user_id),
            Err(e) => log::warn!("세션 무효화 기록 실패 (무시됨): {}", e),
        }
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build(self.config.cookie_name.clone(), token)
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .max_age(time::Duration::hours(self.config.ttl_hours))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.config.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .finish();
        cookie.make_removal();
        cookie
    }
}
