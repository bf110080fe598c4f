//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. [`UserStore`] trait 뒤에
//! MongoDB 구현([`MongoUserRepository`])을 둡니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `username`, `googleId`, `facebookId`에 부분(partial) 유니크 인덱스
//! - **추가 전용 비밀 목록**: `$push`로만 `secrets`를 변경
//! - **중복 감지**: MongoDB 에러 코드 11000을 [`AppError::Conflict`]로 변환

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::config::OAuthProvider;
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 추상화
///
/// 핸들러와 서비스는 이 trait에만 의존합니다. 테스트에서는
/// [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository)를 주입합니다.
///
/// ## 에러 처리
///
/// - **Conflict**: `create` 시 유니크 필드 충돌
/// - **ValidationError**: `create` 시 식별 수단이 하나도 없음
/// - **StoreUnavailable**: 저장소 연결 또는 쿼리 실패
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회. 형식이 잘못된 ID는 `None`으로 처리합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 프로바이더별 사용자 ID로 조회
    async fn find_by_provider_id(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 ID가 할당된 사용자를 반환합니다.
    ///
    /// 사용자명, Google ID, Facebook ID가 모두 없으면 `ValidationError`입니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 사용자의 비밀 목록 끝에 값을 추가합니다.
    ///
    /// 사용자가 존재하지 않으면 `Ok(false)`를 반환합니다.
    async fn push_secret(&self, id: &str, secret: &str) -> AppResult<bool>;

    /// 비밀이 하나 이상 있는 모든 사용자
    async fn find_with_secrets(&self) -> AppResult<Vec<User>>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// - **컬렉션명**: `users`
/// - **인덱스**: `username`, `googleId`, `facebookId` (모두 partial unique)
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 필드가 없는 문서는
    /// 인덱스에서 제외되므로 OAuth 전용 사용자는 `username`이 없어도 됩니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 데이터가 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> AppResult<()> {
        let indexes = ["username", "googleId", "facebookId"]
            .into_iter()
            .map(|field| {
                IndexModel::builder()
                    .keys(doc! { field: 1 })
                    .options(
                        IndexOptions::builder()
                            .unique(true)
                            .partial_filter_expression(doc! { field: { "$exists": true } })
                            .name(format!("{}_unique", field))
                            .build(),
                    )
                    .build()
            })
            .collect::<Vec<_>>();

        self.collection().create_indexes(indexes).await?;

        log::info!("사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }

    async fn find_one(&self, filter: Document) -> AppResult<Option<User>> {
        Ok(self.collection().find_one(filter).await?)
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.find_one(doc! { "_id": object_id }).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_provider_id(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AppResult<Option<User>> {
        self.find_one(doc! { provider.id_field(): provider_id }).await
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if !user.has_identity() {
            return Err(AppError::ValidationError("식별 수단이 없는 사용자".to_string()));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(map_insert_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn push_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self
            .collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$push": { "secrets": secret } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! { "secrets.0": { "$exists": true } })
            .await?;

        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }
}

/// 중복 키 에러는 `Conflict`로, 나머지는 `StoreUnavailable`로 변환합니다.
fn map_insert_error(error: mongodb::error::Error) -> AppError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            AppError::Conflict(write_error.message.clone())
        }
        _ => AppError::from(error),
    }
}
