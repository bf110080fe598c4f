//! 메모리 기반 사용자 리포지토리
//!
//! `USER_STORE=memory` 설정이나 테스트에서 MongoDB 없이 사용합니다.
//! 프로세스 종료 시 데이터는 사라집니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::user_repo::UserStore;
use crate::config::OAuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금 실패".to_string()))
    }

    fn find_where<F>(&self, predicate: F) -> AppResult<Option<User>>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?.iter().find(|u| predicate(u)).cloned())
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.find_where(|u| u.id == Some(object_id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_where(|u| u.username.as_deref() == Some(username))
    }

    async fn find_by_provider_id(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> AppResult<Option<User>> {
        self.find_where(|u| u.provider_id(provider) == Some(provider_id))
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        if !user.has_identity() {
            return Err(AppError::ValidationError("식별 수단이 없는 사용자".to_string()));
        }

        let mut users = self.write()?;

        // MongoDB partial unique 인덱스와 같은 제약
        let conflict = users.iter().any(|existing| {
            (user.username.is_some() && existing.username == user.username)
                || (user.google_id.is_some() && existing.google_id == user.google_id)
                || (user.facebook_id.is_some() && existing.facebook_id == user.facebook_id)
        });
        if conflict {
            return Err(AppError::Conflict("duplicate key".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn push_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let mut users = self.write()?;
        match users.iter_mut().find(|u| u.id == Some(object_id)) {
            Some(user) => {
                user.secrets.push(secret.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_with_secrets(&self) -> AppResult<Vec<User>> {
        Ok(self
            .read()?
            .iter()
            .filter(|u| u.has_secrets())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_create_assigns_id_and_rejects_duplicates() {
        let repo = InMemoryUserRepository::new();

        let created = repo
            .create(User::new_local("alice".to_string(), "hash".to_string()))
            .await
            .unwrap();
        assert!(created.id.is_some());

        let duplicate = repo
            .create(User::new_local("alice".to_string(), "other".to_string()))
            .await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    }

    #[actix_web::test]
    async fn test_create_requires_an_identity() {
        let repo = InMemoryUserRepository::new();
        let mut anonymous = User::new_local("ghost".to_string(), "hash".to_string());
        anonymous.username = None;

        let result = repo.create(anonymous).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(repo.find_with_secrets().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_push_secret_appends_in_order() {
        let repo = InMemoryUserRepository::new();
        let user = repo
            .create(User::new_local("bob".to_string(), "hash".to_string()))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        assert!(repo.find_with_secrets().await.unwrap().is_empty());

        assert!(repo.push_secret(&id, "first").await.unwrap());
        assert!(repo.push_secret(&id, "second").await.unwrap());

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.secrets, vec!["first", "second"]);
        assert_eq!(repo.find_with_secrets().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_push_secret_for_missing_user() {
        let repo = InMemoryUserRepository::new();

        assert!(!repo.push_secret(&ObjectId::new().to_hex(), "x").await.unwrap());
        assert!(!repo.push_secret("not-an-id", "x").await.unwrap());
    }

    #[actix_web::test]
    async fn test_oauth_users_without_username_do_not_conflict() {
        use crate::domain::models::oauth::ProviderProfile;

        let repo = InMemoryUserRepository::new();
        let google = ProviderProfile {
            kind: OAuthProvider::Google,
            provider_id: "g-1".to_string(),
            emails: vec![],
            display_name: None,
        };
        let facebook = ProviderProfile {
            kind: OAuthProvider::Facebook,
            provider_id: "f-1".to_string(),
            emails: vec![],
            display_name: None,
        };

        repo.create(User::new_oauth(&google)).await.unwrap();
        repo.create(User::new_oauth(&facebook)).await.unwrap();

        let found = repo
            .find_by_provider_id(OAuthProvider::Google, "g-1")
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(repo
            .find_by_provider_id(OAuthProvider::Facebook, "g-1")
            .await
            .unwrap()
            .is_none());

        let again = repo.create(User::new_oauth(&google)).await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }
}
