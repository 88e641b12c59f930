//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 활성화 토큰, 액세스 토큰, 리프레시 토큰의 생성과 검증을 담당하며,
//! 세 종류는 각각 독립된 비밀키와 수명을 가집니다.
//!
//! | 토큰 | 수명 | 용도 |
//! |------|------|------|
//! | Activation | 15분 | 이메일 계정 활성화 |
//! | Access | 1일 | API 인증 (Authorization 헤더) |
//! | Refresh | 7일 | 액세스 토큰 재발급 (HttpOnly 쿠키) |

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use once_cell::sync::Lazy;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

use crate::config::TokenConfig;
use crate::domain::models::token::{ActivationClaims, UserClaims};
use crate::errors::AppError;

/// 토큰 종류
///
/// 종류별로 서명 비밀키와 수명이 다릅니다. 한 종류의 토큰을 다른
/// 종류의 검증기로 검증하면 서명 불일치로 실패합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// 계정 활성화 토큰 (15분)
    Activation,
    /// API 액세스 토큰 (1일)
    Access,
    /// 리프레시 토큰 (7일)
    Refresh,
}

impl TokenKind {
    /// 서명에 사용할 비밀키를 반환합니다.
    fn secret(&self) -> String {
        match self {
            TokenKind::Activation => TokenConfig::activation_secret(),
            TokenKind::Access => TokenConfig::access_secret(),
            TokenKind::Refresh => TokenConfig::refresh_secret(),
        }
    }

    /// 토큰 수명을 반환합니다.
    fn ttl(&self) -> Duration {
        match self {
            TokenKind::Activation => Duration::minutes(15),
            TokenKind::Access => Duration::days(1),
            TokenKind::Refresh => Duration::days(7),
        }
    }
}

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 토큰을 생성하고 검증합니다.
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<TokenService>> = Lazy::new(|| Arc::new(TokenService {}));

        Arc::clone(&INSTANCE)
    }

    /// 계정 활성화 토큰을 생성합니다.
    ///
    /// 사용자는 아직 DB에 존재하지 않으므로, 계정 생성에 필요한
    /// 모든 정보(이름, 이메일, 비밀번호 해시)를 토큰에 담습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 인코딩 실패
    pub fn generate_activation_token(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + TokenKind::Activation.ttl();

        let claims = ActivationClaims {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims, TokenKind::Activation)
    }

    /// API 액세스 토큰을 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 사용자 ObjectId hex 문자열
    pub fn generate_access_token(&self, user_id: &str) -> Result<String, AppError> {
        self.generate_user_token(user_id, TokenKind::Access)
    }

    /// 리프레시 토큰을 생성합니다.
    ///
    /// 리프레시 토큰은 HttpOnly 쿠키에 담아 전달합니다.
    pub fn generate_refresh_token(&self, user_id: &str) -> Result<String, AppError> {
        self.generate_user_token(user_id, TokenKind::Refresh)
    }

    /// 활성화 토큰을 검증하고 클레임을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 위조, 형식 오류
    pub fn verify_activation_token(&self, token: &str) -> Result<ActivationClaims, AppError> {
        self.decode_claims(token, TokenKind::Activation)
    }

    /// 액세스 토큰을 검증하고 클레임을 추출합니다.
    pub fn verify_access_token(&self, token: &str) -> Result<UserClaims, AppError> {
        self.decode_claims(token, TokenKind::Access)
    }

    /// 리프레시 토큰을 검증하고 클레임을 추출합니다.
    pub fn verify_refresh_token(&self, token: &str) -> Result<UserClaims, AppError> {
        self.decode_claims(token, TokenKind::Refresh)
    }

    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서
    /// 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 헤더 형식이 잘못됨
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                AppError::AuthenticationError("Invalid Authentication.".to_string())
            })
    }

    fn generate_user_token(&self, user_id: &str, kind: TokenKind) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + kind.ttl();

        let claims = UserClaims {
            id: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims, kind)
    }

    fn encode_claims<T: Serialize>(&self, claims: &T, kind: TokenKind) -> Result<String, AppError> {
        let secret = kind.secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    fn decode_claims<T: DeserializeOwned>(
        &self,
        token: &str,
        kind: TokenKind,
    ) -> Result<T, AppError> {
        let secret = kind.secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<T>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_token_roundtrip() {
        let service = TokenService::instance();

        let token = service
            .generate_activation_token("tester", "tester@example.com", "$2b$04$hash")
            .unwrap();
        let claims = service.verify_activation_token(&token).unwrap();

        assert_eq!(claims.name, "tester");
        assert_eq!(claims.email, "tester@example.com");
        assert_eq!(claims.password_hash, "$2b$04$hash");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_access_token_roundtrip() {
        let service = TokenService::instance();

        let token = service
            .generate_access_token("507f1f77bcf86cd799439011")
            .unwrap();
        let claims = service.verify_access_token(&token).unwrap();

        assert_eq!(claims.id, "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_refresh_token_rejected_as_access_token() {
        // 용도가 다른 토큰은 서명 키가 달라 검증에 실패해야 함
        let service = TokenService::instance();

        let refresh = service
            .generate_refresh_token("507f1f77bcf86cd799439011")
            .unwrap();

        assert!(service.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::instance();

        // 기본 검증기의 leeway(60초)를 확실히 넘긴 만료 시각으로 직접 서명
        let now = Utc::now().timestamp();
        let claims = UserClaims {
            id: "507f1f77bcf86cd799439011".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let secret = TokenConfig::access_secret();
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
        .unwrap();

        let result = service.verify_access_token(&token);
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::instance();

        let result = service.verify_access_token("not.a.jwt");
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(
            service.extract_bearer_token("Bearer abc.def.ghi").unwrap(),
            "abc.def.ghi"
        );
        assert!(service.extract_bearer_token("abc.def.ghi").is_err());
        assert!(service.extract_bearer_token("Bearer ").is_err());
        assert!(service.extract_bearer_token("Basic abc").is_err());
    }
}
