use serde::{Deserialize, Serialize};

use crate::config::OAuthProvider;

/// 프로바이더와 무관하게 정규화된 외부 계정 프로필
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfile {
    /// 프로필을 발급한 프로바이더
    pub kind: OAuthProvider,
    /// 프로바이더가 발급한 고정 사용자 식별자
    pub provider_id: String,
    /// 프로바이더가 제공한 이메일 목록 (스코프에 따라 비어 있을 수 있음)
    pub emails: Vec<String>,
    pub display_name: Option<String>,
}

impl ProviderProfile {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// 첫 번째 이메일의 로컬 파트
    ///
    /// 로그용으로만 사용되며 사용자 문서에는 저장되지 않습니다.
    pub fn derived_username(&self) -> Option<&str> {
        self.primary_email()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
    }
}
