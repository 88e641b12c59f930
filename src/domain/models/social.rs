//! 소셜 로그인 프로바이더 응답 모델
//!
//! Google tokeninfo 엔드포인트와 Facebook Graph API가 반환하는
//! 프로필 페이로드의 역직렬화 구조입니다.

use serde::{Deserialize, Serialize};

/// Google ID 토큰 검증 응답
///
/// `https://oauth2.googleapis.com/tokeninfo` 응답의 필요 필드만
/// 역직렬화합니다. tokeninfo는 모든 값을 문자열로 반환하므로
/// `email_verified`도 "true"/"false" 문자열입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTokenInfo {
    /// 토큰이 발급된 클라이언트 ID
    pub aud: String,
    /// 사용자 이메일
    pub email: String,
    /// 이메일 소유 검증 여부 ("true" / "false")
    pub email_verified: String,
    /// 사용자 표시 이름
    #[serde(default)]
    pub name: String,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub picture: String,
}

impl GoogleTokenInfo {
    /// 이메일 소유가 검증된 토큰인지 확인
    pub fn is_email_verified(&self) -> bool {
        self.email_verified == "true"
    }
}

/// Facebook Graph API 프로필 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookProfile {
    /// 사용자 표시 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// 프로필 이미지
    pub picture: FacebookPicture,
}

/// Facebook 프로필 이미지 래퍼
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookPicture {
    pub data: FacebookPictureData,
}

/// Facebook 프로필 이미지 데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookPictureData {
    /// 이미지 URL
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_tokeninfo_deserialization() {
        let json = r#"{
            "aud": "client-id.apps.googleusercontent.com",
            "email": "tester@gmail.com",
            "email_verified": "true",
            "name": "Tester",
            "picture": "https://lh3.googleusercontent.com/photo.jpg",
            "sub": "1234567890"
        }"#;

        let info: GoogleTokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, "tester@gmail.com");
        assert!(info.is_email_verified());
    }

    #[test]
    fn test_google_tokeninfo_unverified_email() {
        let json = r#"{
            "aud": "client-id",
            "email": "tester@gmail.com",
            "email_verified": "false"
        }"#;

        let info: GoogleTokenInfo = serde_json::from_str(json).unwrap();
        assert!(!info.is_email_verified());
    }

    #[test]
    fn test_facebook_profile_nested_picture() {
        let json = r#"{
            "id": "123",
            "name": "Tester",
            "email": "tester@example.com",
            "picture": { "data": { "url": "https://graph.facebook.com/pic.jpg" } }
        }"#;

        let profile: FacebookProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.picture.data.url, "https://graph.facebook.com/pic.jpg");
    }
}
