//! 메이플웨어 커머스 백엔드
//!
//! Rust 기반의 이커머스 인증 및 사용자 관리 백엔드입니다.
//! 이메일 활성화 기반 회원가입, JWT 토큰 인증, Google/Facebook 소셜
//! 로그인, 프로필/장바구니/주문 내역 관리를 제공합니다.
//!
//! # Features
//!
//! - **회원가입/활성화**: 가입 정보를 활성화 토큰에 담아 메일로 전달,
//!   링크 클릭 시점에 계정 생성
//! - **JWT 인증**: 활성화(15분)/액세스(1일)/리프레시(7일) 토큰,
//!   용도별 독립 서명 키
//! - **소셜 로그인**: Google ID 토큰 검증, Facebook Graph API 프로필 조회
//! - **사용자 리소스**: 프로필, 장바구니, 주문 내역, 관리자 CRUD
//! - **메일 발송**: Gmail XOAUTH2 기반 fire-and-forget 발송
//! - **MongoDB**: 사용자/결제 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/user/*)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use maplewear_backend::services::users::UserService;
//! use maplewear_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let token_service = TokenService::instance();
//!
//! let message = user_service.register(request).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
