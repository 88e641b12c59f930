//! # Middleware Module
//!
//! HTTP 요청 파이프라인 미들웨어입니다.
//!
//! - [`auth_middleware`] - Bearer 액세스 토큰 인증 및 역할 검사

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
