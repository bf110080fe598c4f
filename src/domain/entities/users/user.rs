//! User Entity Implementation
//!
//! 로컬 계정(사용자명/비밀번호)과 OAuth 계정(Google, Facebook)을 하나의
//! 문서 구조로 표현하는 사용자 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;
use crate::domain::models::oauth::ProviderProfile;

/// 사용자 엔티티
///
/// `username`, `google_id`, `facebook_id` 중 최소 하나는 항상 존재합니다.
/// `secrets`는 제출 순서대로 뒤에 추가만 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 로그인용 사용자명 (unique)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// bcrypt 해시 (로컬 계정만 보유)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(default)]
    pub secrets: Vec<String>,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new_local(username: String, password_hash: String) -> Self {
        Self {
            id: None,
            username: Some(username),
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            secrets: Vec::new(),
        }
    }

    /// 새 OAuth 사용자 생성
    ///
    /// 프로바이더 ID만 저장합니다. 프로필의 이메일/이름은 저장하지 않습니다.
    pub fn new_oauth(profile: &ProviderProfile) -> Self {
        let mut user = Self {
            id: None,
            username: None,
            password_hash: None,
            google_id: None,
            facebook_id: None,
            secrets: Vec::new(),
        };

        match profile.kind {
            OAuthProvider::Google => user.google_id = Some(profile.provider_id.clone()),
            OAuthProvider::Facebook => user.facebook_id = Some(profile.provider_id.clone()),
        }

        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 프로바이더에서의 사용자 ID
    pub fn provider_id(&self, provider: OAuthProvider) -> Option<&str> {
        match provider {
            OAuthProvider::Google => self.google_id.as_deref(),
            OAuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.username.is_some() && self.password_hash.is_some()
    }

    /// 최소 하나의 식별 수단을 가지고 있는지 확인
    pub fn has_identity(&self) -> bool {
        self.username.is_some() || self.google_id.is_some() || self.facebook_id.is_some()
    }

    pub fn has_secrets(&self) -> bool {
        !self.secrets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(kind: OAuthProvider, id: &str) -> ProviderProfile {
        ProviderProfile {
            kind,
            provider_id: id.to_string(),
            emails: vec!["someone@example.com".to_string()],
            display_name: Some("Someone".to_string()),
        }
    }

    #[test]
    fn test_new_local_user() {
        let user = User::new_local("alice".to_string(), "$2b$04$hash".to_string());

        assert!(user.can_authenticate_with_password());
        assert!(user.has_identity());
        assert!(!user.has_secrets());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_new_oauth_user_keeps_only_provider_id() {
        let user = User::new_oauth(&profile(OAuthProvider::Google, "g-123"));

        assert_eq!(user.google_id.as_deref(), Some("g-123"));
        assert!(user.facebook_id.is_none());
        assert!(user.username.is_none());
        assert!(user.password_hash.is_none());
        assert!(user.has_identity());
        assert!(!user.can_authenticate_with_password());

        let user = User::new_oauth(&profile(OAuthProvider::Facebook, "fb-9"));
        assert_eq!(user.provider_id(OAuthProvider::Facebook), Some("fb-9"));
        assert_eq!(user.provider_id(OAuthProvider::Google), None);
    }

    #[test]
    fn test_document_field_names() {
        let mut user = User::new_oauth(&profile(OAuthProvider::Google, "g-1"));
        user.secrets.push("a".to_string());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["googleId"], "g-1");
        assert_eq!(json["secrets"][0], "a");
        assert!(json.get("_id").is_none());
        assert!(json.get("passwordHash").is_none());
    }
}
