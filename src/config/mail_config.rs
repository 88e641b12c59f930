//! 메일 발송 설정 관리 모듈
//!
//! Gmail SMTP(XOAUTH2) 발송에 필요한 OAuth2 자격 증명과
//! 발신자 주소를 환경 변수 기반으로 제공합니다.

use std::env;

/// Gmail XOAUTH2 메일 발송 설정
pub struct MailConfig;

impl MailConfig {
    /// Gmail SMTP 릴레이 호스트를 반환합니다.
    pub fn smtp_host() -> String {
        env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string())
    }

    /// OAuth2 클라이언트 ID를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `MAILING_SERVICE_CLIENT_ID`: Google OAuth 클라이언트 ID
    pub fn client_id() -> String {
        env::var("MAILING_SERVICE_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("⚠️ MAILING_SERVICE_CLIENT_ID 미설정, 메일 발송 불가");
            String::new()
        })
    }

    /// OAuth2 클라이언트 시크릿을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `MAILING_SERVICE_CLIENT_SECRET`: Google OAuth 클라이언트 시크릿
    pub fn client_secret() -> String {
        env::var("MAILING_SERVICE_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("⚠️ MAILING_SERVICE_CLIENT_SECRET 미설정, 메일 발송 불가");
            String::new()
        })
    }

    /// OAuth2 리프레시 토큰을 반환합니다.
    ///
    /// 발송 시마다 이 값으로 새 액세스 토큰을 발급받습니다.
    ///
    /// # Environment Variables
    ///
    /// - `MAILING_SERVICE_REFRESH_TOKEN`: Google OAuth 리프레시 토큰
    pub fn refresh_token() -> String {
        env::var("MAILING_SERVICE_REFRESH_TOKEN").unwrap_or_else(|_| {
            log::warn!("⚠️ MAILING_SERVICE_REFRESH_TOKEN 미설정, 메일 발송 불가");
            String::new()
        })
    }

    /// 발신자 이메일 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `SENDER_EMAIL_ADDRESS`: 발신자 Gmail 주소
    pub fn sender_address() -> String {
        env::var("SENDER_EMAIL_ADDRESS")
            .unwrap_or_else(|_| "no-reply@maplewear.dev".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_host_default() {
        if env::var("SMTP_HOST").is_err() {
            assert_eq!(MailConfig::smtp_host(), "smtp.gmail.com");
        }
    }

    #[test]
    fn test_sender_address_default() {
        if env::var("SENDER_EMAIL_ADDRESS").is_err() {
            assert_eq!(MailConfig::sender_address(), "no-reply@maplewear.dev");
        }
    }
}
