//! 사용자 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{CartItem, Role, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 프로필입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub cart: Vec<CartItem>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            avatar,
            cart,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            avatar,
            cart,
            created_at,
            updated_at,
        }
    }
}

/// 단순 메시지 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// 액세스 토큰 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let user = User::new_local(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("password"));
        assert!(json.contains("tester@example.com"));
    }

    #[test]
    fn test_user_response_id_hex() {
        let mut user = User::new_local(
            "tester".to_string(),
            "tester@example.com".to_string(),
            "$2b$04$hash".to_string(),
        );
        let oid = mongodb::bson::oid::ObjectId::new();
        user.id = Some(oid);

        let response = UserResponse::from(user);
        assert_eq!(response.id, oid.to_hex());
    }
}
