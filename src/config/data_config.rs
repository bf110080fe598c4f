//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 우선 확인합니다. 둘 다 없으면
    /// `.env` 파일 선택에 쓰는 `PROFILE`을 따릅니다 (`prod`만 `Production`, 기본값 `dev`).
    pub fn current() -> Self {
        let explicit = env::var("ENVIRONMENT").or_else(|_| env::var("NODE_ENV")).ok();
        Self::resolve(explicit.as_deref(), env::var("PROFILE").ok().as_deref())
    }

    /// 명시적 환경 값과 프로필로 실행 환경을 결정합니다.
    pub fn resolve(explicit: Option<&str>, profile: Option<&str>) -> Self {
        match (explicit, profile) {
            (Some(raw), _) => Self::from_str(raw),
            (None, Some("prod")) => Environment::Production,
            (None, _) => Environment::Development,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 세션 쿠키에 `Secure` 속성을 붙여야 하는 환경인지 확인합니다.
    pub fn requires_secure_cookies(&self) -> bool {
        matches!(self, Environment::Staging | Environment::Production)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위로 설정되어 있으면 그 값을 우선합니다.
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 3000
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 메모리 (재시작 시 소멸)
    Memory,
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI를 반환합니다.
    ///
    /// `URL` → `MONGODB_URI` 순서로 확인하며, 둘 다 없으면 로컬 기본값을 사용합니다.
    pub fn uri() -> String {
        env::var("URL")
            .or_else(|_| env::var("MONGODB_URI"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름. 기본값: "secrets_board"
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "secrets_board".to_string())
    }

    /// `USER_STORE` 환경 변수로 선택된 저장소 백엔드
    pub fn backend() -> StoreBackend {
        Self::backend_from_str(&env::var("USER_STORE").unwrap_or_default())
    }

    pub fn backend_from_str(s: &str) -> StoreBackend {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::Mongo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_follows_profile_when_unset() {
        assert_eq!(Environment::resolve(None, None), Environment::Development);
        assert_eq!(Environment::resolve(None, Some("dev")), Environment::Development);
        assert_eq!(Environment::resolve(None, Some("prod")), Environment::Production);
        assert_eq!(
            Environment::resolve(Some("production"), Some("dev")),
            Environment::Production
        );
        assert_eq!(Environment::resolve(Some("test"), Some("prod")), Environment::Test);
        assert!(!Environment::resolve(None, None).requires_secure_cookies());
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_secure_cookies_only_outside_dev() {
        assert!(!Environment::Development.requires_secure_cookies());
        assert!(!Environment::Test.requires_secure_cookies());
        assert!(Environment::Staging.requires_secure_cookies());
        assert!(Environment::Production.requires_secure_cookies());
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(DatabaseConfig::backend_from_str("memory"), StoreBackend::Memory);
        assert_eq!(DatabaseConfig::backend_from_str("MEMORY"), StoreBackend::Memory);
        assert_eq!(DatabaseConfig::backend_from_str("mongo"), StoreBackend::Mongo);
        assert_eq!(DatabaseConfig::backend_from_str(""), StoreBackend::Mongo);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
