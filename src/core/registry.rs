//! # Service Registry - 싱글톤 의존성 주입 시스템
//!
//! 백엔드 서비스를 위한 싱글톤 기반 의존성 주입 컨테이너입니다.
//! 인프라 컴포넌트(Database, MailService 등)를 애플리케이션 시작 시점에
//! 등록하고, 리포지토리/서비스가 `instance()` 초기화 시점에 꺼내 씁니다.
//!
//! ## 동작 방식
//!
//! ```text
//! 1. 런타임 초기화 (main)
//!    ├─ Database 연결 → ServiceLocator::set(Arc<Database>)
//!    └─ MailService 생성 → ServiceLocator::set(Arc<MailService>)
//!
//! 2. 의존성 주입 (각 컴포넌트의 instance())
//!    ├─ once_cell Lazy로 최초 1회 생성
//!    └─ 생성자에서 ServiceLocator::get::<T>() 호출
//! ```
//!
//! 모든 컴포넌트는 타입당 정확히 하나의 인스턴스만 존재하며,
//! `RwLock`으로 동시성 안전성을 보장합니다.

use once_cell::sync::Lazy;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// 전역 싱글톤 저장소
static SERVICES: Lazy<RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 전역 의존성 주입 컨테이너
///
/// 타입 기반으로 싱글톤 인스턴스를 등록하고 조회합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let database = Arc::new(Database::connect().await?);
/// ServiceLocator::set(database);
///
/// let db: Arc<Database> = ServiceLocator::get::<Database>();
/// ```
pub struct ServiceLocator;

impl ServiceLocator {
    /// 싱글톤 인스턴스를 등록합니다.
    ///
    /// 동일 타입이 이미 등록되어 있으면 교체합니다.
    pub fn set<T: Any + Send + Sync>(instance: Arc<T>) {
        let mut services = SERVICES
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        services.insert(TypeId::of::<T>(), instance);
    }

    /// 등록된 싱글톤 인스턴스를 조회합니다.
    ///
    /// # Panics
    ///
    /// 해당 타입이 등록되지 않은 경우 패닉합니다. 인프라 컴포넌트는
    /// 서버 기동 시 반드시 등록되므로, 미등록 조회는 초기화 순서
    /// 버그를 의미합니다.
    pub fn get<T: Any + Send + Sync>() -> Arc<T> {
        let services = SERVICES
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        services
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.clone().downcast::<T>().ok())
            .unwrap_or_else(|| {
                panic!(
                    "Service not found: {}. Make sure it's registered before use.",
                    std::any::type_name::<T>()
                )
            })
    }

    /// 해당 타입이 등록되어 있는지 확인합니다.
    pub fn contains<T: Any + Send + Sync>() -> bool {
        let services = SERVICES
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        services.contains_key(&TypeId::of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyComponent {
        value: u32,
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        ServiceLocator::set(Arc::new(DummyComponent { value: 42 }));

        let component = ServiceLocator::get::<DummyComponent>();
        assert_eq!(component.value, 42);
    }

    #[test]
    fn test_contains() {
        struct UnregisteredComponent;

        assert!(!ServiceLocator::contains::<UnregisteredComponent>());

        ServiceLocator::set(Arc::new(DummyComponent { value: 1 }));
        assert!(ServiceLocator::contains::<DummyComponent>());
    }

    #[test]
    fn test_set_replaces_existing_instance() {
        struct ReplaceableComponent {
            value: u32,
        }

        ServiceLocator::set(Arc::new(ReplaceableComponent { value: 1 }));
        ServiceLocator::set(Arc::new(ReplaceableComponent { value: 2 }));

        let component = ServiceLocator::get::<ReplaceableComponent>();
        assert_eq!(component.value, 2);
    }
}
