//! 세션 복원 미들웨어
//!
//! 모든 요청에서 세션 쿠키를 읽어 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! request extensions에 넣습니다. 인증이 필요한지 판단하는 것은 핸들러의 몫이므로
//! 이 미들웨어는 요청을 거부하지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::session_inner::SessionMiddlewareService;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionMiddleware;

impl SessionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
