//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 액세스 토큰을 검증하고
//! 사용자 정보를 요청 확장에 저장합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::domain::entities::user::Role;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰 클레임에는 사용자 ID만 실리므로, 역할 요구사항이 있는 경우
/// 요청 시점에 DB에서 사용자를 조회하여 역할을 확인합니다.
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (없으면 인증만 요구)
    required_role: Option<Role>,
}

impl AuthMiddleware {
    /// 인증만 요구하는 미들웨어 생성
    pub fn required() -> Self {
        Self {
            required_role: None,
        }
    }

    /// 관리자 역할을 요구하는 미들웨어 생성
    pub fn admin_only() -> Self {
        Self {
            required_role: Some(Role::Admin),
        }
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_has_no_role_requirement() {
        let middleware = AuthMiddleware::required();
        assert!(middleware.required_role.is_none());
    }

    #[test]
    fn test_admin_only_requires_admin_role() {
        let middleware = AuthMiddleware::admin_only();
        assert_eq!(middleware.required_role, Some(Role::Admin));
    }
}
