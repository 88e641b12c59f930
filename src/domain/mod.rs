//! # Domain Module
//!
//! 도메인 계층입니다. 엔티티, 요청/응답 DTO, 내부 모델을 정의합니다.
//!
//! - [`entities`] - MongoDB에 저장되는 핵심 도메인 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//! - [`models`] - 토큰 클레임, 인증 컨텍스트 등 내부 모델

pub mod dto;
pub mod entities;
pub mod models;
