//! HTML 폼 요청 DTO
//!
//! `application/x-www-form-urlencoded` 본문을 매핑합니다.
//! 누락된 필드는 빈 문자열로 받고, 검증은 `validator`에서 처리합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 폼 (`POST /register`)
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 254, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로그인 폼 (`POST /login`)
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 254, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 비밀 제출 폼 (`POST /submit`)
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub secret: String,
}

/// `GET /login?error=...` 쿼리
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_requires_both_fields() {
        let form = RegisterForm {
            username: "".to_string(),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_err());

        let form = RegisterForm {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(form.validate().is_err());

        let form = RegisterForm {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_login_form_rejects_overlong_username() {
        let form = LoginForm {
            username: "a".repeat(255),
            password: "pw".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
