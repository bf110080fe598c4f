//! SessionMiddleware 세션 복원 로직
use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use crate::core::context::AppContext;

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let context = req.app_data::<web::Data<AppContext>>().cloned();
            let sessions = context.as_ref().map(|ctx| &ctx.sessions);

            let token = sessions.and_then(|sessions| {
                req.cookie(sessions.cookie_name())
                    .map(|cookie| cookie.value().to_string())
                    .filter(|value| !value.is_empty())
            });

            if let (Some(sessions), Some(token)) = (sessions, token) {
                match sessions.deserialize(&token).await {
                    Ok(Some(user)) => {
                        log::debug!("세션 복원: 사용자 ID {}", user.user_id);
                        req.extensions_mut().insert(user);
                    }
                    Ok(None) => log::debug!("세션 쿠키가 유효하지 않음, 비로그인으로 진행"),
                    // 저장소 장애 시에도 공개 페이지는 계속 제공
                    Err(e) => log::error!("세션 복원 실패: {}", e),
                }
            }

            service.call(req).await
        })
    }
}
