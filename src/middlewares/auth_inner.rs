//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::user::Role;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::repositories::users::UserRepository;
use crate::services::auth::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<Role>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            let user = match authenticate(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            // 역할 요구사항이 있으면 DB에서 실제 역할 확인
            if let Some(required) = required_role {
                if let Err(err) = check_role(&user, required).await {
                    log::warn!("권한 부족: 사용자 ID {}", user.user_id);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 Bearer 액세스 토큰을 추출하고 검증합니다.
fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let token_service = TokenService::instance();

    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Invalid Authentication.".to_string()))?;

    let token = token_service.extract_bearer_token(auth_header)?;
    let claims = token_service.verify_access_token(token)?;

    Ok(AuthenticatedUser {
        user_id: claims.id,
    })
}

/// 사용자의 실제 역할이 요구 역할을 만족하는지 확인합니다.
async fn check_role(user: &AuthenticatedUser, required: Role) -> Result<(), AppError> {
    let repo = UserRepository::instance();

    let record = repo
        .find_by_id(&user.user_id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("Invalid Authentication.".to_string()))?;

    if required == Role::Admin && !record.role.is_admin() {
        return Err(AppError::AuthorizationError(
            "Admin resources access denied.".to_string(),
        ));
    }

    Ok(())
}
