//! # Service Module
//!
//! 비즈니스 로직 계층입니다. 각 서비스는 `instance()`로 접근하는
//! 싱글톤이며, 리포지토리와 외부 연동(JWT, 메일, 소셜 API)을
//! 조합하여 도메인 흐름을 구현합니다.
//!
//! - [`auth`] - JWT 토큰, Google/Facebook 검증
//! - [`users`] - 사용자 도메인 전체 흐름
//! - [`mail`] - Gmail XOAUTH2 메일 발송

pub mod auth;
pub mod mail;
pub mod users;

pub use auth::{FacebookAuthService, GoogleAuthService, TokenService};
pub use mail::MailService;
pub use users::UserService;
