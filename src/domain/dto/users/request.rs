//! 사용자 요청 DTO
//!
//! 인증 및 사용자 관련 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::user::CartItem;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(min = 1, max = 50, message = "Please fill in all fields."))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "Invalid emails."))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

/// 계정 활성화 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationRequest {
    /// 활성화 메일로 전달된 활성화 토큰
    pub activation_token: String,
}

/// 로그인 요청 DTO
///
/// 로그인은 이메일 형식을 검사하지 않습니다. 형식이 이상한 이메일도
/// 조회까지 진행되어 "User does not exist."로 응답합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 비밀번호 찾기 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "Invalid emails."))]
    pub email: String,
}

/// 비밀번호 재설정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    /// 새 비밀번호 (최소 6자)
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

/// 프로필 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 새 표시 이름
    #[validate(length(min = 1, max = 50, message = "Please fill in all fields."))]
    pub name: Option<String>,
    /// 새 프로필 이미지 URL
    pub avatar: Option<String>,
}

/// 장바구니 교체 요청 DTO
///
/// 부분 수정이 아닌 전체 교체 방식으로 동작합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartRequest {
    pub cart: Vec<CartItem>,
}

/// Google 소셜 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    /// Google이 발급한 ID 토큰
    #[serde(rename = "tokenId")]
    pub token_id: String,
}

/// Facebook 소셜 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookLoginRequest {
    /// Facebook 액세스 토큰
    #[serde(rename = "accessToken")]
    pub access_token: String,
    /// Facebook 사용자 ID
    #[serde(rename = "userID")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_valid() {
        let request = RegisterRequest {
            name: "tester".to_string(),
            email: "tester@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_invalid_email() {
        let request = RegisterRequest {
            name: "tester".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_short_password() {
        let request = RegisterRequest {
            name: "tester".to_string(),
            email: "tester@example.com".to_string(),
            password: "12345".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_empty_name() {
        let request = RegisterRequest {
            name: String::new(),
            email: "tester@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_skips_email_format_check() {
        let request = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_reset_password_min_length() {
        let request = ResetPasswordRequest {
            password: "12345".to_string(),
        };
        assert!(request.validate().is_err());

        let request = ResetPasswordRequest {
            password: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_social_login_request_field_names() {
        let google: GoogleLoginRequest =
            serde_json::from_str(r#"{"tokenId": "abc"}"#).unwrap();
        assert_eq!(google.token_id, "abc");

        let facebook: FacebookLoginRequest =
            serde_json::from_str(r#"{"accessToken": "at", "userID": "123"}"#).unwrap();
        assert_eq!(facebook.access_token, "at");
        assert_eq!(facebook.user_id, "123");
    }
}
