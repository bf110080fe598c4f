//! # 사용자 서비스
//!
//! 로컬 계정 가입/인증과 비밀 게시판 동작을 담당합니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost, 솔트 자동 생성
//! - **블로킹 분리**: 해싱/검증은 `web::block`으로 스레드 풀에서 실행
//! - **평문 비밀번호**: 저장하거나 로그에 남기지 않음

use std::sync::Arc;

use actix_web::web;

use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::UserStore;
use crate::utils::string_utils::validate_required_string;

/// 비밀 제출 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 비밀이 사용자 목록 끝에 추가됨
    Stored,
    /// 세션의 사용자가 저장소에 없음 (아무것도 변경되지 않음)
    UserMissing,
}

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소는 [`UserStore`] trait 객체로 주입됩니다.
///
/// ```rust,ignore
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()), 4);
/// let user = service.register("alice", "pw").await?;
/// let same = service.verify("alice", "pw").await?;
/// ```
pub struct UserService {
    store: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    pub fn store(&self) -> Arc<dyn UserStore> {
        self.store.clone()
    }

    /// 새 로컬 계정 생성
    ///
    /// 사용자명은 앞뒤 공백을 제거한 값으로 저장됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - ID가 할당된 새 사용자
    /// * `Err(AppError::DuplicateUsername)` - 이미 사용 중인 사용자명
    /// * `Err(AppError::ValidationError)` - 빈 사용자명 또는 비밀번호
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let start_time = std::time::Instant::now();

        let username = validate_required_string(username, "username")?;
        if password.is_empty() {
            return Err(AppError::ValidationError("password은(는) 필수입니다".to_string()));
        }

        if self.store.find_by_username(&username).await?.is_some() {
            log::info!("가입 거부 - 중복 사용자명: {}", username);
            return Err(AppError::DuplicateUsername);
        }

        let password_hash = self.hash_password(password).await?;

        let user = match self.store.create(User::new_local(username.clone(), password_hash)).await {
            Ok(user) => user,
            // 조회와 삽입 사이에 같은 이름이 먼저 저장된 경우
            Err(AppError::Conflict(_)) => return Err(AppError::DuplicateUsername),
            Err(e) => return Err(e),
        };

        log::info!(
            "로컬 계정 생성: {} ({:?})",
            username,
            start_time.elapsed()
        );

        Ok(user)
    }

    /// 사용자명/비밀번호 검증
    ///
    /// 존재하지 않는 사용자, OAuth 전용 계정, 비밀번호 불일치는 모두
    /// 같은 [`AppError::InvalidCredentials`]로 응답합니다.
    pub async fn verify(&self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();

        let user = self
            .store
            .find_by_username(username)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_hash = user
            .password_hash
            .clone()
            .filter(|_| user.can_authenticate_with_password());
        let Some(password_hash) = password_hash else {
            log::warn!("비밀번호가 없는 계정으로 로그인 시도: {}", username);
            return Err(AppError::InvalidCredentials);
        };

        let verify_start = std::time::Instant::now();
        let password = password.to_string();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 작업 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::info!("로그인 실패 - 비밀번호 불일치: {}", username);
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// 게시판에 표시할 모든 비밀 (사용자 순서, 사용자 내 제출 순서)
    pub async fn list_secrets(&self) -> AppResult<Vec<String>> {
        let users = self.store.find_with_secrets().await?;

        Ok(users.into_iter().flat_map(|u| u.secrets).collect())
    }

    /// 사용자의 비밀 목록에 새 비밀을 추가합니다.
    ///
    /// 공백뿐인 비밀은 `ValidationError`로 거부됩니다. 앞뒤 공백은 보존합니다.
    pub async fn submit_secret(&self, user_id: &str, secret: &str) -> AppResult<SubmitOutcome> {
        if secret.trim().is_empty() {
            return Err(AppError::ValidationError("secret은(는) 필수입니다".to_string()));
        }

        // 세션에는 ID만 있으므로 사용자 문서가 남아 있는지 먼저 확인
        if self.store.find_by_id(user_id).await?.is_none()
            || !self.store.push_secret(user_id, secret).await?
        {
            log::warn!("세션 사용자를 찾을 수 없어 비밀을 저장하지 않음: {}", user_id);
            return Ok(SubmitOutcome::UserMissing);
        }

        log::info!("비밀 제출 완료 - 사용자: {}", user_id);
        Ok(SubmitOutcome::Stored)
    }

    async fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let password = password.to_string();
        let cost = self.bcrypt_cost;

        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .with_context(|| format!("비밀번호 해싱 실패 (cost {})", cost))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }
}
