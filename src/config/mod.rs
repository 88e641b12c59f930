//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 비밀키, 소셜 로그인, 클라이언트 URL 설정
//! - [`mail_config`] - Gmail XOAUTH2 메일 발송 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전 (미설정 시 경고 로그)
//! - 환경별(개발/테스트/스테이징/프로덕션) 차등 설정

pub mod auth_config;
pub mod data_config;
pub mod mail_config;

pub use auth_config::{ClientConfig, SocialConfig, TokenConfig};
pub use data_config::{Environment, MongoConfig, PasswordConfig, ServerConfig};
pub use mail_config::MailConfig;
