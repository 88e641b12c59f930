//! Facebook 소셜 로그인 서비스 구현
//!
//! 프론트엔드가 전달한 Facebook 액세스 토큰과 사용자 ID로
//! Graph API에서 프로필(이름, 이메일, 사진)을 조회합니다.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::registry::ServiceLocator;
use crate::domain::models::social::FacebookProfile;
use crate::errors::AppError;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v2.9";

/// Facebook Graph API 프로필 조회 서비스
pub struct FacebookAuthService {
    http: Arc<reqwest::Client>,
}

impl FacebookAuthService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<FacebookAuthService>> = Lazy::new(|| {
            Arc::new(FacebookAuthService {
                http: ServiceLocator::get::<reqwest::Client>(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    /// 액세스 토큰으로 Facebook 사용자 프로필을 조회합니다.
    ///
    /// # Arguments
    ///
    /// * `access_token` - Facebook이 발급한 사용자 액세스 토큰
    /// * `user_id` - Facebook 사용자 ID
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 토큰이 무효하거나 프로필 조회 거부
    /// * `AppError::ExternalServiceError` - Graph API 호출 실패
    pub async fn fetch_profile(
        &self,
        access_token: &str,
        user_id: &str,
    ) -> Result<FacebookProfile, AppError> {
        let url = format!("{}/{}/", GRAPH_API_BASE, user_id);

        let response = self
            .http
            .get(&url)
            .query(&[("fields", "id,name,email,picture"), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Facebook Graph API 요청 실패: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(AppError::ValidationError(
                "Invalid Facebook token.".to_string(),
            ));
        }

        let profile = response.json::<FacebookProfile>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("Facebook 프로필 파싱 실패: {}", e))
        })?;

        Ok(profile)
    }
}
