//! # Repository Module
//!
//! 데이터 액세스 계층입니다. MongoDB 컬렉션별로 리포지토리를 두며,
//! 각 리포지토리는 `instance()`로 접근하는 싱글톤입니다.

pub mod payments;
pub mod users;

pub use payments::PaymentRepository;
pub use users::UserRepository;
