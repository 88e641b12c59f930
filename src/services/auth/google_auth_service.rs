//! Google 소셜 로그인 서비스 구현
//!
//! 프론트엔드가 전달한 Google ID 토큰을 Google의 tokeninfo
//! 엔드포인트로 검증하고, 검증된 프로필 정보를 반환합니다.
//!
//! ## 검증 절차
//!
//! 1. `https://oauth2.googleapis.com/tokeninfo?id_token={token}` 조회
//! 2. `aud` 클레임이 우리 클라이언트 ID와 일치하는지 확인
//! 3. `email_verified`가 "true"인지 확인

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::SocialConfig;
use crate::core::registry::ServiceLocator;
use crate::domain::models::social::GoogleTokenInfo;
use crate::errors::AppError;

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Google ID 토큰 검증 서비스
pub struct GoogleAuthService {
    http: Arc<reqwest::Client>,
}

impl GoogleAuthService {
    /// 싱글톤 인스턴스를 반환합니다.
    ///
    /// 최초 호출 시 `ServiceLocator`에서 공유 HTTP 클라이언트를
    /// 주입받습니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<GoogleAuthService>> = Lazy::new(|| {
            Arc::new(GoogleAuthService {
                http: ServiceLocator::get::<reqwest::Client>(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    /// Google ID 토큰을 검증하고 프로필 정보를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 토큰이 무효하거나, 다른 앱에
    ///   발급되었거나, 이메일 소유가 검증되지 않음
    /// * `AppError::ExternalServiceError` - Google API 호출 실패
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleTokenInfo, AppError> {
        let response = self
            .http
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google tokeninfo 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ValidationError("Invalid Google token.".to_string()));
        }

        let info = response.json::<GoogleTokenInfo>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Google tokeninfo 응답 파싱 실패: {}", e))
        })?;

        // 다른 애플리케이션에 발급된 토큰 거부
        if info.aud != SocialConfig::google_client_id() {
            return Err(AppError::ValidationError("Invalid Google token.".to_string()));
        }

        if !info.is_email_verified() {
            return Err(AppError::ValidationError(
                "Email verification failed.".to_string(),
            ));
        }

        Ok(info)
    }
}
