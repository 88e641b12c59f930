//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 비밀키, 소셜 로그인 자격 증명, 프론트엔드 클라이언트 주소 등
//! 인증 시스템 전반의 설정값을 환경 변수 기반으로 제공합니다.
//!
//! ## 보안 주의사항
//!
//! 모든 비밀키는 용도별로 분리되어 있습니다. 활성화 토큰의 유출이
//! 액세스/리프레시 토큰 위조로 이어지지 않도록 서로 다른 키로 서명합니다.
//! 프로덕션 환경에서는 반드시 모든 `*_TOKEN_SECRET` 환경 변수를
//! 설정해야 합니다.

use std::env;

/// JWT 토큰 서명 설정
///
/// 세 종류의 토큰(활성화, 액세스, 리프레시)에 대해 각각 독립된
/// 서명 비밀키를 관리합니다.
pub struct TokenConfig;

impl TokenConfig {
    /// 계정 활성화 토큰 서명용 비밀키를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `ACTIVATION_TOKEN_SECRET`: 활성화 토큰 서명 키
    pub fn activation_secret() -> String {
        env::var("ACTIVATION_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ ACTIVATION_TOKEN_SECRET 미설정, 개발용 기본값 사용 중");
            "dev-activation-secret-do-not-use-in-production".to_string()
        })
    }

    /// API 액세스 토큰 서명용 비밀키를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `ACCESS_TOKEN_SECRET`: 액세스 토큰 서명 키
    pub fn access_secret() -> String {
        env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ ACCESS_TOKEN_SECRET 미설정, 개발용 기본값 사용 중");
            "dev-access-secret-do-not-use-in-production".to_string()
        })
    }

    /// 리프레시 토큰 서명용 비밀키를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `REFRESH_TOKEN_SECRET`: 리프레시 토큰 서명 키
    pub fn refresh_secret() -> String {
        env::var("REFRESH_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ REFRESH_TOKEN_SECRET 미설정, 개발용 기본값 사용 중");
            "dev-refresh-secret-do-not-use-in-production".to_string()
        })
    }
}

/// 프론트엔드 클라이언트 설정
pub struct ClientConfig;

impl ClientConfig {
    /// 프론트엔드 애플리케이션의 기본 URL을 반환합니다.
    ///
    /// 계정 활성화 및 비밀번호 재설정 메일의 링크 생성에 사용됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `CLIENT_URL`: 프론트엔드 주소. 기본값: "http://localhost:3000"
    pub fn url() -> String {
        env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// 소셜 로그인 설정
///
/// Google ID 토큰 검증과 Facebook Graph API 조회,
/// 그리고 소셜 계정의 내부 비밀번호 유도에 사용되는 값들입니다.
pub struct SocialConfig;

impl SocialConfig {
    /// Google OAuth 클라이언트 ID를 반환합니다.
    ///
    /// ID 토큰의 `aud` 클레임 검증에 사용됩니다.
    ///
    /// # Environment Variables
    ///
    /// - `MAILING_SERVICE_CLIENT_ID`: Google OAuth 클라이언트 ID
    pub fn google_client_id() -> String {
        env::var("MAILING_SERVICE_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("⚠️ MAILING_SERVICE_CLIENT_ID 미설정, Google 로그인 검증 불가");
            String::new()
        })
    }

    /// Google 소셜 계정 비밀번호 유도용 비밀값을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `GOOGLE_SECRET`: Google 계정 비밀번호 유도 키
    pub fn google_secret() -> String {
        env::var("GOOGLE_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ GOOGLE_SECRET 미설정, 개발용 기본값 사용 중");
            "dev-google-secret".to_string()
        })
    }

    /// Facebook 소셜 계정 비밀번호 유도용 비밀값을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `FACEBOOK_SECRET`: Facebook 계정 비밀번호 유도 키
    pub fn facebook_secret() -> String {
        env::var("FACEBOOK_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ FACEBOOK_SECRET 미설정, 개발용 기본값 사용 중");
            "dev-facebook-secret".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_secrets_are_distinct() {
        // 환경 변수 미설정 시에도 용도별 기본 키는 서로 달라야 함
        if env::var("ACTIVATION_TOKEN_SECRET").is_err()
            && env::var("ACCESS_TOKEN_SECRET").is_err()
            && env::var("REFRESH_TOKEN_SECRET").is_err()
        {
            let activation = TokenConfig::activation_secret();
            let access = TokenConfig::access_secret();
            let refresh = TokenConfig::refresh_secret();

            assert_ne!(activation, access);
            assert_ne!(access, refresh);
            assert_ne!(activation, refresh);
        }
    }

    #[test]
    fn test_client_url_default() {
        if env::var("CLIENT_URL").is_err() {
            assert_eq!(ClientConfig::url(), "http://localhost:3000");
        }
    }
}
