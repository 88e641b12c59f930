//! 도메인 엔티티 모듈

pub mod payment;
pub mod user;

pub use payment::Payment;
pub use user::{CartItem, DEFAULT_AVATAR_URL, Role, User};
