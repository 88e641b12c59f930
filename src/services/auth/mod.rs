//! 인증 서비스 모듈

pub mod facebook_auth_service;
pub mod google_auth_service;
pub mod token_service;

pub use facebook_auth_service::FacebookAuthService;
pub use google_auth_service::GoogleAuthService;
pub use token_service::TokenService;
