//! 메일 발송 서비스 구현
//!
//! Gmail SMTP 릴레이를 통해 계정 활성화 메일과 비밀번호 재설정 메일을
//! 발송합니다. 인증은 XOAUTH2 방식을 사용하며, 발송 시마다 OAuth2
//! 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
//!
//! 메일 발송은 가입/재설정 요청의 응답 경로를 막지 않도록
//! fire-and-forget으로 실행됩니다. 발송 실패는 로그로만 남습니다.

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::MailConfig;
use crate::core::registry::ServiceLocator;
use crate::errors::{AppError, ErrorContext};

const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Google OAuth2 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
struct OAuthTokenResponse {
    access_token: String,
}

/// Gmail XOAUTH2 메일 발송 서비스
pub struct MailService {
    http: Arc<reqwest::Client>,
}

impl MailService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<MailService>> = Lazy::new(|| {
            Arc::new(MailService {
                http: ServiceLocator::get::<reqwest::Client>(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    /// 계정 활성화 메일을 비동기로 발송합니다.
    ///
    /// 실패해도 호출자에게 전파하지 않고 로그로만 남깁니다.
    pub fn send_activation_mail(&self, to: &str, url: &str) {
        self.send_in_background(
            to.to_string(),
            url.to_string(),
            "Verify your email address".to_string(),
        );
    }

    /// 비밀번호 재설정 메일을 비동기로 발송합니다.
    pub fn send_reset_password_mail(&self, to: &str, url: &str) {
        self.send_in_background(
            to.to_string(),
            url.to_string(),
            "Reset your password".to_string(),
        );
    }

    fn send_in_background(&self, to: String, url: String, text: String) {
        let http = Arc::clone(&self.http);

        actix_web::rt::spawn(async move {
            if let Err(e) = Self::send_mail(&http, &to, &url, &text).await {
                log::error!("📧 메일 발송 실패 ({}): {}", to, e);
            } else {
                log::info!("📧 메일 발송 완료: {}", to);
            }
        });
    }

    async fn send_mail(
        http: &reqwest::Client,
        to: &str,
        url: &str,
        text: &str,
    ) -> Result<(), AppError> {
        let sender = MailConfig::sender_address();

        let from: Mailbox = format!("Maplewear <{}>", sender)
            .parse()
            .context("발신자 주소 파싱 실패")?;
        let to_mailbox: Mailbox = to.parse().context("수신자 주소 파싱 실패")?;

        let message = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject("Maplewear - Verification Email")
            .header(ContentType::TEXT_HTML)
            .body(Self::build_template(url, text))
            .context("메일 본문 생성 실패")?;

        let access_token = Self::fetch_access_token(http).await?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&MailConfig::smtp_host())
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP 릴레이 설정 실패: {}", e)))?
            .authentication(vec![Mechanism::Xoauth2])
            .credentials(Credentials::new(sender, access_token))
            .build();

        mailer
            .send(message)
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("SMTP 발송 실패: {}", e)))?;

        Ok(())
    }

    /// OAuth2 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    async fn fetch_access_token(http: &reqwest::Client) -> Result<String, AppError> {
        let params = [
            ("client_id", MailConfig::client_id()),
            ("client_secret", MailConfig::client_secret()),
            ("refresh_token", MailConfig::refresh_token()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = http
            .post(GOOGLE_TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("OAuth2 토큰 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "OAuth2 토큰 발급 거부: {}",
                response.status()
            )));
        }

        let token = response.json::<OAuthTokenResponse>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("OAuth2 토큰 응답 파싱 실패: {}", e))
        })?;

        Ok(token.access_token)
    }

    /// 메일 본문 HTML 템플릿을 생성합니다.
    fn build_template(url: &str, text: &str) -> String {
        format!(
            r#"<div style="max-width: 700px; margin: auto; border: 10px solid #ddd; padding: 50px 20px; font-size: 110%;">
            <h2 style="text-align: center; text-transform: uppercase; color: teal;">Welcome to Maplewear.</h2>
            <p>Congratulations! You're almost set to start using Maplewear.
                Just click the button below to validate your email address.
            </p>

            <a href="{url}" style="background: crimson; text-decoration: none; color: white; padding: 10px 20px; margin: 10px 0; display: inline-block;">{text}</a>

            <p>If the button doesn't work for any reason, you can also click on the link below:</p>

            <div>{url}</div>
            </div>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_contains_url_and_text() {
        let html = MailService::build_template(
            "http://localhost:3000/user/activate/abc",
            "Verify your email address",
        );

        assert!(html.contains("http://localhost:3000/user/activate/abc"));
        assert!(html.contains("Verify your email address"));
        assert!(html.contains("Welcome to Maplewear."));
    }
}
