//! Authentication HTTP Handlers
//!
//! 가입/활성화/로그인/토큰 갱신/로그아웃/비밀번호 재설정과 소셜 로그인
//! 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! # Token Delivery
//!
//! - **액세스 토큰**: 응답 본문으로 전달, 클라이언트가 Authorization
//!   헤더에 실어 보냄
//! - **리프레시 토큰**: `refreshtoken` HttpOnly 쿠키로 전달, 갱신
//!   엔드포인트 경로에만 스코프됨

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::request::{
    ActivationRequest, FacebookLoginRequest, ForgotPasswordRequest, GoogleLoginRequest,
    LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 리프레시 토큰 쿠키 이름
const REFRESH_COOKIE_NAME: &str = "refreshtoken";

/// 리프레시 토큰 쿠키가 스코프되는 경로
const REFRESH_COOKIE_PATH: &str = "/user/refresh_token";

/// 리프레시 토큰 쿠키를 생성합니다. (7일 수명)
fn build_refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build(REFRESH_COOKIE_NAME, token)
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .max_age(Duration::days(7))
        .finish()
}

/// 요청에서 리프레시 토큰 쿠키 값을 읽습니다.
fn read_refresh_cookie(req: &HttpRequest) -> Option<String> {
    req.cookie(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
}

/// 회원가입 핸들러
///
/// 사용자 레코드는 만들지 않고 활성화 메일만 발송합니다.
///
/// # Endpoint
/// `POST /user/register`
#[post("/register")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UserService::instance().register(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 계정 활성화 핸들러
///
/// 활성화 토큰을 검증하여 사용자 레코드를 생성하고,
/// 리프레시 토큰 쿠키를 설정합니다.
///
/// # Endpoint
/// `POST /user/activation`
#[post("/activation")]
pub async fn activation(payload: web::Json<ActivationRequest>) -> Result<HttpResponse, AppError> {
    let (rf_token, response) = UserService::instance()
        .activate(&payload.activation_token)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(build_refresh_cookie(rf_token))
        .json(response))
}

/// 로그인 핸들러
///
/// 성공 시 액세스 토큰을 응답 본문으로 반환합니다.
///
/// # Endpoint
/// `POST /user/login`
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let access_token = UserService::instance().login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Login success!",
        "access_token": access_token
    })))
}

/// 액세스 토큰 발급 핸들러
///
/// 리프레시 토큰 쿠키를 검증하여 새 액세스 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /user/refreshtoken`
#[post("/refreshtoken")]
pub async fn get_access_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let rf_token = read_refresh_cookie(&req);
    let response = UserService::instance().refresh_access_token(rf_token.as_deref())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 액세스 토큰 갱신 핸들러
///
/// `get_access_token`과 동일한 동작의 GET 변형입니다. 프론트엔드가
/// 페이지 로드 시 세션 복원에 사용합니다.
///
/// # Endpoint
/// `GET /user/refresh_token`
#[get("/refresh_token")]
pub async fn refresh_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let rf_token = read_refresh_cookie(&req);
    let response = UserService::instance().refresh_access_token(rf_token.as_deref())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그아웃 핸들러
///
/// 리프레시 토큰 쿠키를 제거합니다. 사전 로그인 여부와 관계없이
/// 항상 성공합니다.
///
/// # Endpoint
/// `GET /user/logout`
#[get("/logout")]
pub async fn logout() -> Result<HttpResponse, AppError> {
    let mut cookie = Cookie::build(REFRESH_COOKIE_NAME, "")
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .finish();
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(json!({ "msg": "Logged out" })))
}

/// 비밀번호 찾기 핸들러
///
/// 재설정 링크를 메일로 발송합니다.
///
/// # Endpoint
/// `POST /user/forgot`
#[post("/forgot")]
pub async fn forgot_password(
    payload: web::Json<ForgotPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UserService::instance().forgot_password(&payload.email).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 비밀번호 재설정 핸들러
///
/// 재설정 메일의 토큰을 Bearer 인증으로 요구합니다. 인증 미들웨어가
/// 리소스 단위로 감싸야 하므로 라우트 매크로 없이 등록합니다.
///
/// # Endpoint
/// `POST /user/reset` (인증 필요)
pub async fn reset_password(
    user: AuthenticatedUser,
    payload: web::Json<ResetPasswordRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = UserService::instance()
        .reset_password(&user.user_id, &payload.password)
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// Google 소셜 로그인 핸들러
///
/// # Endpoint
/// `POST /user/google_login`
#[post("/google_login")]
pub async fn google_login(
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (rf_token, response) = UserService::instance()
        .google_login(&payload.token_id)
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(build_refresh_cookie(rf_token))
        .json(response))
}

/// Facebook 소셜 로그인 핸들러
///
/// # Endpoint
/// `POST /user/facebook_login`
#[post("/facebook_login")]
pub async fn facebook_login(
    payload: web::Json<FacebookLoginRequest>,
) -> Result<HttpResponse, AppError> {
    let (rf_token, response) = UserService::instance()
        .facebook_login(payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok()
        .cookie(build_refresh_cookie(rf_token))
        .json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_attributes() {
        let cookie = build_refresh_cookie("token-value".to_string());

        assert_eq!(cookie.name(), "refreshtoken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/user/refresh_token"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }
}
