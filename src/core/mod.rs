//! # Core Framework Module
//!
//! 의존성 주입 컨테이너 등 애플리케이션 핵심 기반 기능을 제공합니다.
//!
//! - [`registry`] - 전역 싱글톤 컨테이너 (`ServiceLocator`)

pub mod registry;

pub use registry::ServiceLocator;
