//! # 서버 렌더링 뷰
//!
//! `templates/*.hbs`를 바이너리에 포함하여 시작 시 한 번 등록합니다.
//! 모든 값은 handlebars 기본 HTML 이스케이프를 거칩니다.

use handlebars::Handlebars;
use serde_json::json;

use crate::errors::{AppError, AppResult};

/// 로그인/가입 폼 하단의 소셜 로그인 버튼 표시 여부
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderLinks {
    pub google: bool,
    pub facebook: bool,
}

pub struct Views {
    registry: Handlebars<'static>,
    providers: ProviderLinks,
}

impl Views {
    pub fn new(providers: ProviderLinks) -> AppResult<Self> {
        let mut registry = Handlebars::new();

        let partials = [
            ("header", include_str!("../../templates/header.hbs")),
            ("footer", include_str!("../../templates/footer.hbs")),
        ];
        for (name, source) in partials {
            registry
                .register_partial(name, source)
                .map_err(|e| AppError::TemplateError(format!("{} 등록 실패: {}", name, e)))?;
        }

        let templates = [
            ("home", include_str!("../../templates/home.hbs")),
            ("register", include_str!("../../templates/register.hbs")),
            ("login", include_str!("../../templates/login.hbs")),
            ("secrets", include_str!("../../templates/secrets.hbs")),
            ("submit", include_str!("../../templates/submit.hbs")),
        ];
        for (name, source) in templates {
            registry
                .register_template_string(name, source)
                .map_err(|e| AppError::TemplateError(format!("{} 등록 실패: {}", name, e)))?;
        }

        Ok(Self {
            registry,
            providers,
        })
    }

    fn render(&self, name: &str, data: &serde_json::Value) -> AppResult<String> {
        self.registry
            .render(name, data)
            .map_err(|e| AppError::TemplateError(format!("{} 렌더링 실패: {}", name, e)))
    }

    pub fn home(&self) -> AppResult<String> {
        self.render("home", &json!({}))
    }

    pub fn register(&self, error: Option<&str>, username: Option<&str>) -> AppResult<String> {
        self.render(
            "register",
            &json!({
                "error": error,
                "username": username,
                "google": self.providers.google,
                "facebook": self.providers.facebook,
            }),
        )
    }

    pub fn login(&self, error: Option<&str>, username: Option<&str>) -> AppResult<String> {
        self.render(
            "login",
            &json!({
                "error": error,
                "username": username,
                "google": self.providers.google,
                "facebook": self.providers.facebook,
            }),
        )
    }

    pub fn secrets(&self, secrets: &[String], authenticated: bool) -> AppResult<String> {
        self.render(
            "secrets",
            &json!({
                "secrets": secrets,
                "authenticated": authenticated,
            }),
        )
    }

    pub fn submit(&self, error: Option<&str>, secret: Option<&str>) -> AppResult<String> {
        self.render("submit", &json!({ "error": error, "secret": secret }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views() -> Views {
        Views::new(ProviderLinks {
            google: true,
            facebook: false,
        })
        .unwrap()
    }

    #[test]
    fn test_all_templates_render() {
        let views = views();

        assert!(views.home().unwrap().contains("/register"));
        assert!(views.register(None, None).unwrap().contains("action=\"/register\""));
        assert!(views.login(None, None).unwrap().contains("action=\"/login\""));
        assert!(views.submit(None, None).unwrap().contains("name=\"secret\""));
        assert!(views.secrets(&[], false).unwrap().contains("No secrets yet."));
    }

    #[test]
    fn test_provider_links_follow_configuration() {
        let html = views().login(None, None).unwrap();

        assert!(html.contains("/auth/google"));
        assert!(!html.contains("/auth/facebook"));
    }

    #[test]
    fn test_error_message_is_shown() {
        let html = views().login(Some("Authentication failed"), Some("a@b.c")).unwrap();

        assert!(html.contains("Authentication failed"));
        assert!(html.contains("value=\"a@b.c\""));
    }

    #[test]
    fn test_secrets_are_escaped() {
        let secrets = vec!["<script>alert(1)</script>".to_string(), "plain".to_string()];
        let html = views().secrets(&secrets, true).unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("plain"));
        assert!(html.contains("/logout"));
    }
}
