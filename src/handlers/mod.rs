//! # Handler Module
//!
//! HTTP 엔드포인트 핸들러 계층입니다. 요청 파싱/검증과 응답 변환만
//! 담당하고, 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! - [`auth`] - 가입/활성화/로그인/토큰/소셜 로그인
//! - [`users`] - 프로필/장바구니/주문 내역

pub mod auth;
pub mod users;
