//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 인증 레벨별로 그룹화하여 제공합니다.
//! 모든 사용자 엔드포인트는 `/user` 아래에 마운트되며, 헬스체크
//! 엔드포인트를 포함합니다.
//!
//! # Route Groups
//!
//! ## Public 라우트 (인증 불필요)
//! - `POST /user/register` - 회원가입 (활성화 메일 발송)
//! - `POST /user/activation` - 계정 활성화
//! - `POST /user/login` - 로그인
//! - `POST /user/refreshtoken` - 액세스 토큰 발급 (쿠키 기반)
//! - `GET /user/refresh_token` - 액세스 토큰 갱신 (쿠키 기반)
//! - `GET /user/logout` - 로그아웃
//! - `POST /user/forgot` - 비밀번호 찾기
//! - `POST /user/google_login` - Google 소셜 로그인
//! - `POST /user/facebook_login` - Facebook 소셜 로그인
//!
//! ## Protected 라우트 (Bearer 인증 필요)
//! - `POST /user/reset` - 비밀번호 재설정
//! - `GET /user/infor` - 내 프로필 조회
//! - `PATCH /user/update` - 프로필 수정
//! - `PATCH /user/addcart` - 장바구니 교체
//! - `GET /user/history` - 주문 내역 조회
//!
//! ## Admin 라우트 (관리자 역할 필요)
//! - `GET /user/all_infor` - 전체 사용자 조회
//! - `DELETE /user/delete/{id}` - 사용자 삭제

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{App, web};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// `/user` 스코프는 하나만 등록합니다. actix-web은 프리픽스가 겹치는
/// 스코프 간 fall-through를 하지 않으므로, 인증이 필요한 엔드포인트는
/// 리소스 단위로 인증 미들웨어를 감싸서 같은 스코프 안에 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            // Public routes
            .service(handlers::auth::register)
            .service(handlers::auth::activation)
            .service(handlers::auth::login)
            .service(handlers::auth::get_access_token)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::logout)
            .service(handlers::auth::forgot_password)
            .service(handlers::auth::google_login)
            .service(handlers::auth::facebook_login)
            // Protected routes
            .service(
                web::resource("/reset")
                    .wrap(AuthMiddleware::required())
                    .route(web::post().to(handlers::auth::reset_password)),
            )
            .service(
                web::resource("/infor")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::get_user_info)),
            )
            .service(
                web::resource("/update")
                    .wrap(AuthMiddleware::required())
                    .route(web::patch().to(handlers::users::update_user)),
            )
            .service(
                web::resource("/addcart")
                    .wrap(AuthMiddleware::required())
                    .route(web::patch().to(handlers::users::add_cart)),
            )
            .service(
                web::resource("/history")
                    .wrap(AuthMiddleware::required())
                    .route(web::get().to(handlers::users::get_history)),
            )
            // Admin routes
            .service(
                web::resource("/all_infor")
                    .wrap(AuthMiddleware::admin_only())
                    .route(web::get().to(handlers::users::get_all_users_info)),
            )
            .service(
                web::resource("/delete/{id}")
                    .wrap(AuthMiddleware::admin_only())
                    .route(web::delete().to(handlers::users::delete_user)),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "maplewear_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT (activation/access/refresh)",
            "mail": "Gmail XOAUTH2"
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::time::Duration;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::json;

    use super::configure_all_routes;

    #[actix_web::test]
    async fn test_health_check_returns_200() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_protected_routes_reject_missing_token_with_401() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let requests = vec![
            test::TestRequest::get().uri("/user/infor"),
            test::TestRequest::get().uri("/user/history"),
            test::TestRequest::patch().uri("/user/update").set_json(json!({})),
            test::TestRequest::patch()
                .uri("/user/addcart")
                .set_json(json!({ "cart": [] })),
            test::TestRequest::post()
                .uri("/user/reset")
                .set_json(json!({ "password": "secret123" })),
        ];

        for req in requests {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_admin_routes_reject_missing_token_with_401() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let requests = vec![
            test::TestRequest::get().uri("/user/all_infor"),
            test::TestRequest::delete().uri("/user/delete/64b000000000000000000000"),
        ];

        for req in requests {
            let res = test::call_service(&app, req.to_request()).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_protected_route_rejects_garbage_token_with_401() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri("/user/infor")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_clears_refresh_cookie() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/user/logout").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);

        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == "refreshtoken")
            .expect("refreshtoken 쿠키가 있어야 함");
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/user/refresh_token"));
    }

    #[actix_web::test]
    async fn test_register_rejects_invalid_payload_with_400() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/user/register")
            .set_json(json!({
                "name": "tester",
                "email": "not-an-email",
                "password": "secret123"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_user_route_returns_404() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/user/no_such_route").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
