//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 인증 실패(`DuplicateUsername`, `InvalidCredentials`, `OAuthFailed`)는
//! 핸들러에서 폼 재렌더링이나 리다이렉트로 복구되고, 나머지는
//! [`ResponseError`](actix_web::ResponseError) 구현을 통해 HTML 에러 페이지로 변환됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn register(form: RegisterForm) -> Result<User, AppError> {
//!     if store.find_by_username(&form.username).await?.is_some() {
//!         return Err(AppError::DuplicateUsername);
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 이미 사용 중인 사용자명으로 가입 시도 (409 Conflict)
    #[error("Username already registered")]
    DuplicateUsername,

    /// 사용자명 또는 비밀번호 불일치 (401 Unauthorized)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// OAuth 프로바이더 인증 실패 (401 Unauthorized)
    #[error("OAuth authentication failed: {0}")]
    OAuthFailed(String),

    /// 저장소(MongoDB/Redis) 접근 실패 (503 Service Unavailable)
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// 유니크 제약 충돌 (409 Conflict)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 세션 토큰 발급/검증 실패 (401 Unauthorized)
    #[error("Session error: {0}")]
    SessionError(String),

    /// 템플릿 등록/렌더링 실패 (500 Internal Server Error)
    #[error("Template error: {0}")]
    TemplateError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그인/가입 폼에서 복구 가능한 인증 실패인지 확인합니다.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            AppError::DuplicateUsername | AppError::InvalidCredentials | AppError::OAuthFailed(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateUsername | AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InvalidCredentials
            | AppError::OAuthFailed(_)
            | AppError::SessionError(_) => StatusCode::UNAUTHORIZED,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::TemplateError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 에러를 최소한의 HTML 페이지로 변환합니다.
    ///
    /// 내부 에러의 상세 메시지는 로그에만 남기고 클라이언트에는 상태 문구만 전달합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        actix_web::HttpResponse::build(status)
            .insert_header(ContentType::html())
            .body(format!(
                "<!DOCTYPE html><html><head><title>{code} {reason}</title></head>\
                 <body><h1>{code} {reason}</h1><p><a href=\"/\">Home</a></p></body></html>",
                code = status.as_u16(),
                reason = reason,
            ))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_duplicate_username_is_conflict() {
        let response = AppError::DuplicateUsername.error_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_auth_failures_are_unauthorized() {
        assert_eq!(AppError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::OAuthFailed("denied".to_string()).status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_store_unavailable_response() {
        let error = AppError::StoreUnavailable("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_is_auth_failure() {
        assert!(AppError::DuplicateUsername.is_auth_failure());
        assert!(AppError::InvalidCredentials.is_auth_failure());
        assert!(AppError::OAuthFailed("x".to_string()).is_auth_failure());
        assert!(!AppError::StoreUnavailable("x".to_string()).is_auth_failure());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            _ => panic!("Expected InternalError"),
        }
    }

    #[test]
    fn test_error_context_is_lazy() {
        let ok: Result<u32, &str> = Ok(7);
        assert_eq!(ok.with_context(|| panic!("평가되면 안 됨")).unwrap(), 7);

        let err: Result<u32, &str> = Err("boom");
        match err.with_context(|| format!("작업 {} 실패", 3)) {
            Err(AppError::InternalError(msg)) => assert_eq!(msg, "작업 3 실패: boom"),
            _ => panic!("Expected InternalError"),
        }
    }
}
