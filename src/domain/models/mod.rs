//! 내부 도메인 모델 모듈

pub mod auth;
pub mod social;
pub mod token;

pub use auth::AuthenticatedUser;
pub use social::{FacebookProfile, GoogleTokenInfo};
pub use token::{ActivationClaims, UserClaims};
