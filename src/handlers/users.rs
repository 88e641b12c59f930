//! User HTTP Handlers
//!
//! 프로필, 장바구니, 주문 내역 등 인증 이후의 사용자 리소스
//! 엔드포인트를 처리하는 핸들러 함수들입니다. 모든 핸들러는 라우트
//! 설정에서 리소스 단위로 인증 미들웨어에 감싸여 등록되며,
//! 미들웨어가 저장한 [`AuthenticatedUser`]를 extractor로 받습니다.

use actix_web::{HttpResponse, web};
use validator::Validate;

use crate::domain::dto::users::request::{AddCartRequest, UpdateUserRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 내 프로필 조회 핸들러
///
/// 비밀번호 해시를 제외한 프로필을 반환합니다.
///
/// # Endpoint
/// `GET /user/infor` (인증 필요)
pub async fn get_user_info(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().get_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 전체 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /user/all_infor` (관리자 전용)
pub async fn get_all_users_info(_user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().get_all_users().await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 프로필 수정 핸들러
///
/// 이름과 아바타만 수정 가능합니다.
///
/// # Endpoint
/// `PATCH /user/update` (인증 필요)
pub async fn update_user(
    user: AuthenticatedUser,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UserService::instance()
        .update_user(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 장바구니 교체 핸들러
///
/// 요청 본문의 장바구니로 기존 장바구니를 통째로 교체합니다.
///
/// # Endpoint
/// `PATCH /user/addcart` (인증 필요)
pub async fn add_cart(
    user: AuthenticatedUser,
    payload: web::Json<AddCartRequest>,
) -> Result<HttpResponse, AppError> {
    let response = UserService::instance()
        .add_cart(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 주문 내역 조회 핸들러
///
/// # Endpoint
/// `GET /user/history` (인증 필요)
pub async fn get_history(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().history(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// # Endpoint
/// `DELETE /user/delete/{id}` (관리자 전용)
pub async fn delete_user(
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = UserService::instance().delete_user(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
