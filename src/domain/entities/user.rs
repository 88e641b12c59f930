//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬 인증(이메일/비밀번호)과 소셜 인증(Google/Facebook)을 모두
//! 지원하는 통합된 사용자 모델을 제공합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 신규 사용자의 기본 프로필 이미지 URL
pub const DEFAULT_AVATAR_URL: &str =
    "https://res.cloudinary.com/devatchannel/image/upload/v1602752402/avatar/avatar_cugq40.png";

/// 사용자 역할
///
/// 데이터베이스에는 소문자 문자열("user", "admin")로 저장됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 일반 사용자
    User,
    /// 관리자
    Admin,
}

impl Role {
    /// 관리자 역할인지 확인
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// 장바구니 항목
///
/// 사용자 문서에 내장(embedded)되어 저장되는 상품 스냅샷입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// 상품 식별자
    pub product_id: String,
    /// 상품명
    pub title: String,
    /// 담은 시점의 단가
    pub price: f64,
    /// 수량
    pub quantity: i64,
    /// 상품 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 소셜 인증 사용자도 내부적으로는 유도된 비밀번호 해시를 보유하므로
/// 로컬 사용자와 동일한 구조를 가집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
    /// 사용자 역할
    #[serde(default)]
    pub role: Role,
    /// 프로필 이미지 URL
    pub avatar: String,
    /// 장바구니
    #[serde(default)]
    pub cart: Vec<CartItem>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/비밀번호)
    ///
    /// 기본 역할과 기본 아바타를 가진 사용자를 생성합니다.
    pub fn new_local(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role: Role::User,
            avatar: DEFAULT_AVATAR_URL.to_string(),
            cart: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 새 소셜 사용자 생성 (Google/Facebook)
    ///
    /// 프로바이더가 제공한 프로필 이미지를 아바타로 사용합니다.
    /// `password_hash`는 프로바이더별 비밀값으로 유도된 내부 비밀번호의
    /// 해시입니다.
    pub fn new_social(name: String, email: String, password_hash: String, avatar: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role: Role::User,
            avatar,
            cart: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_user_defaults() {
        let user = User::new_local(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        assert_eq!(user.role, Role::User);
        assert_eq!(user.avatar, DEFAULT_AVATAR_URL);
        assert!(user.cart.is_empty());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_new_social_user_keeps_provider_avatar() {
        let user = User::new_social(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "https://example.com/avatar.png".to_string(),
        );

        assert_eq!(user.avatar, "https://example.com/avatar.png");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let role: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_role_is_admin() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::User.is_admin());
    }
}
