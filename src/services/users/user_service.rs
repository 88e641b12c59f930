//! 사용자 비즈니스 로직 서비스 구현
//!
//! 회원가입/활성화/로그인/토큰 갱신/비밀번호 재설정과 프로필, 장바구니,
//! 주문 내역, 소셜 로그인까지 사용자 도메인의 전체 흐름을 담당합니다.
//!
//! ## 가입 흐름
//!
//! 회원가입 시점에는 사용자를 DB에 만들지 않습니다. 가입 정보(이름,
//! 이메일, 비밀번호 해시)를 활성화 토큰에 담아 메일로 보내고, 사용자가
//! 링크를 열어 활성화를 완료하는 시점에 비로소 레코드를 생성합니다.
//! 따라서 미활성 계정 레코드나 별도 정리 작업이 존재하지 않습니다.

use mongodb::bson::doc;
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::config::{ClientConfig, PasswordConfig, SocialConfig};
use crate::domain::dto::users::request::{
    AddCartRequest, FacebookLoginRequest, LoginRequest, RegisterRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::{AccessTokenResponse, MessageResponse, UserResponse};
use crate::domain::entities::payment::Payment;
use crate::domain::entities::user::User;
use crate::errors::AppError;
use crate::repositories::payments::PaymentRepository;
use crate::repositories::users::UserRepository;
use crate::services::auth::facebook_auth_service::FacebookAuthService;
use crate::services::auth::google_auth_service::GoogleAuthService;
use crate::services::auth::token_service::TokenService;
use crate::services::mail::MailService;

/// 비밀번호 재설정이 차단된 공용 시연 계정
const SEED_ACCOUNT_EMAIL: &str = "brightlayo11@gmail.com";

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
    payment_repo: Arc<PaymentRepository>,
    token_service: Arc<TokenService>,
    mail_service: Arc<MailService>,
    google_auth: Arc<GoogleAuthService>,
    facebook_auth: Arc<FacebookAuthService>,
}

impl UserService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<UserService>> = Lazy::new(|| {
            Arc::new(UserService {
                user_repo: UserRepository::instance(),
                payment_repo: PaymentRepository::instance(),
                token_service: TokenService::instance(),
                mail_service: MailService::instance(),
                google_auth: GoogleAuthService::instance(),
                facebook_auth: FacebookAuthService::instance(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    /// 회원가입을 처리합니다.
    ///
    /// 사용자를 생성하지 않고 활성화 토큰을 발급하여 메일로 보냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 이메일이 이미 사용 중
    pub async fn register(&self, request: RegisterRequest) -> Result<MessageResponse, AppError> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ValidationError(
                "The email already exists.".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;

        let activation_token = self.token_service.generate_activation_token(
            &request.name,
            &request.email,
            &password_hash,
        )?;

        let url = format!("{}/user/activate/{}", ClientConfig::url(), activation_token);
        self.mail_service
            .send_activation_mail(&request.email, &url);

        Ok(MessageResponse::new(
            "Registration successful! Please check your email to activate your account",
        ))
    }

    /// 활성화 토큰을 검증하고 사용자 레코드를 생성합니다.
    ///
    /// 성공 시 새 사용자에게 바인딩된 리프레시 토큰을 함께 반환하며,
    /// 핸들러가 이를 HttpOnly 쿠키로 내려보냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 토큰 무효/만료, 또는 이미 활성화된 이메일
    pub async fn activate(&self, activation_token: &str) -> Result<(String, MessageResponse), AppError> {
        let claims = self
            .token_service
            .verify_activation_token(activation_token)
            .map_err(|_| {
                AppError::ValidationError("Invalid or expired activation token.".to_string())
            })?;

        // 이중 활성화 방지
        if self.user_repo.find_by_email(&claims.email).await?.is_some() {
            return Err(AppError::ValidationError(
                "This email already exists".to_string(),
            ));
        }

        let user = User::new_local(claims.name, claims.email, claims.password_hash);
        let created = self.user_repo.create(user).await?;

        let user_id = created
            .id_string()
            .ok_or_else(|| AppError::InternalError("생성된 사용자에 ID가 없습니다".to_string()))?;
        let refresh_token = self.token_service.generate_refresh_token(&user_id)?;

        Ok((
            refresh_token,
            MessageResponse::new("Account has been activated"),
        ))
    }

    /// 이메일/비밀번호 로그인을 처리합니다.
    ///
    /// 성공 시 액세스 토큰을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 존재하지 않는 이메일 또는 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::ValidationError("User does not exist.".to_string()))?;

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::ValidationError("Incorrect password.".to_string()));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자에 ID가 없습니다".to_string()))?;

        self.token_service.generate_access_token(&user_id)
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급합니다.
    ///
    /// 쿠키가 없거나 토큰이 무효/만료된 경우 재로그인 안내 메시지로
    /// 실패합니다.
    pub fn refresh_access_token(
        &self,
        refresh_token: Option<&str>,
    ) -> Result<AccessTokenResponse, AppError> {
        let token = refresh_token.ok_or_else(|| {
            AppError::ValidationError("Please Login or Register".to_string())
        })?;

        let claims = self
            .token_service
            .verify_refresh_token(token)
            .map_err(|_| AppError::ValidationError("Please Login or Register".to_string()))?;

        let access_token = self.token_service.generate_access_token(&claims.id)?;

        Ok(AccessTokenResponse { access_token })
    }

    /// 비밀번호 재설정 메일을 발송합니다.
    ///
    /// 재설정 링크에는 해당 사용자에게 바인딩된 액세스 토큰이 실리며,
    /// 재설정 엔드포인트는 이 토큰을 Bearer 인증으로 요구합니다.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::ValidationError("This email does not exists.".to_string()))?;

        // 공용 시연 계정은 비밀번호 변경 차단
        if email == SEED_ACCOUNT_EMAIL {
            return Err(AppError::ValidationError(
                "To change your password, register with your own email...Thanks".to_string(),
            ));
        }

        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자에 ID가 없습니다".to_string()))?;
        let access_token = self.token_service.generate_access_token(&user_id)?;

        let url = format!("{}/user/reset/{}", ClientConfig::url(), access_token);
        self.mail_service.send_reset_password_mail(email, &url);

        Ok(MessageResponse::new("please check your email to continue"))
    }

    /// 인증된 사용자의 비밀번호를 교체합니다.
    pub async fn reset_password(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<MessageResponse, AppError> {
        let password_hash = hash_password(password)?;

        self.user_repo
            .update_password_by_id(user_id, &password_hash)
            .await?;

        Ok(MessageResponse::new("Password Changed successfully"))
    }

    /// 인증된 사용자의 프로필을 조회합니다.
    pub async fn get_user(&self, user_id: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::ValidationError("User does not exist.".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 모든 사용자의 프로필을 조회합니다. (관리자 전용)
    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 프로필(이름, 아바타)을 수정합니다.
    pub async fn update_user(
        &self,
        user_id: &str,
        request: UpdateUserRequest,
    ) -> Result<MessageResponse, AppError> {
        let mut update_doc = doc! {};
        if let Some(name) = request.name {
            update_doc.insert("name", name);
        }
        if let Some(avatar) = request.avatar {
            update_doc.insert("avatar", avatar);
        }

        if !update_doc.is_empty() {
            self.user_repo.update(user_id, update_doc).await?;
        }

        Ok(MessageResponse::new("Update Success"))
    }

    /// 장바구니를 통째로 교체합니다.
    pub async fn add_cart(
        &self,
        user_id: &str,
        request: AddCartRequest,
    ) -> Result<MessageResponse, AppError> {
        if self.user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::ValidationError("User does not exist.".to_string()));
        }

        let cart = mongodb::bson::to_bson(&request.cart)
            .map_err(|e| AppError::InternalError(format!("장바구니 직렬화 실패: {}", e)))?;

        self.user_repo.update(user_id, doc! { "cart": cart }).await?;

        Ok(MessageResponse::new("Added to cart"))
    }

    /// 인증된 사용자의 주문 내역을 조회합니다.
    pub async fn history(&self, user_id: &str) -> Result<Vec<Payment>, AppError> {
        self.payment_repo.find_by_user_id(user_id).await
    }

    /// 사용자를 삭제합니다. (관리자 전용)
    pub async fn delete_user(&self, id: &str) -> Result<MessageResponse, AppError> {
        self.user_repo.delete(id).await?;

        Ok(MessageResponse::new("Deleted Successfully"))
    }

    /// Google ID 토큰으로 로그인 또는 가입을 처리합니다.
    ///
    /// 성공 시 리프레시 토큰과 응답 메시지를 반환합니다.
    pub async fn google_login(&self, token_id: &str) -> Result<(String, MessageResponse), AppError> {
        let info = self.google_auth.verify_id_token(token_id).await?;

        let derived_password = derive_social_password(&info.email, &SocialConfig::google_secret());

        let refresh_token = self
            .social_sign_in(
                &info.email,
                &info.name,
                &info.picture,
                &derived_password,
                "password is incorrect",
            )
            .await?;

        Ok((refresh_token, MessageResponse::new("Login success!")))
    }

    /// Facebook 액세스 토큰으로 로그인 또는 가입을 처리합니다.
    pub async fn facebook_login(
        &self,
        request: FacebookLoginRequest,
    ) -> Result<(String, MessageResponse), AppError> {
        let profile = self
            .facebook_auth
            .fetch_profile(&request.access_token, &request.user_id)
            .await?;

        let derived_password =
            derive_social_password(&profile.email, &SocialConfig::facebook_secret());

        let refresh_token = self
            .social_sign_in(
                &profile.email,
                &profile.name,
                &profile.picture.data.url,
                &derived_password,
                "Password is incorrect",
            )
            .await?;

        Ok((refresh_token, MessageResponse::new("Login Success")))
    }

    /// 소셜 로그인 공통 처리.
    ///
    /// 동일 이메일의 계정이 있으면 유도 비밀번호 일치를 확인해 다른
    /// 경로로 만든 계정의 탈취를 막고, 없으면 프로바이더 프로필로 새
    /// 계정을 만듭니다. 두 경우 모두 해당 계정의 ID로 리프레시 토큰을
    /// 발급합니다.
    async fn social_sign_in(
        &self,
        email: &str,
        name: &str,
        avatar: &str,
        derived_password: &str,
        mismatch_msg: &str,
    ) -> Result<String, AppError> {
        let user_id = match self.user_repo.find_by_email(email).await? {
            Some(user) => {
                if !verify_password(derived_password, &user.password_hash)? {
                    return Err(AppError::ValidationError(mismatch_msg.to_string()));
                }

                user.id_string()
                    .ok_or_else(|| AppError::InternalError("사용자에 ID가 없습니다".to_string()))?
            }
            None => {
                let password_hash = hash_password(derived_password)?;
                let user = User::new_social(
                    name.to_string(),
                    email.to_string(),
                    password_hash,
                    avatar.to_string(),
                );

                let created = self.user_repo.create(user).await?;
                created.id_string().ok_or_else(|| {
                    AppError::InternalError("생성된 사용자에 ID가 없습니다".to_string())
                })?
            }
        };

        self.token_service.generate_refresh_token(&user_id)
    }
}

/// 비밀번호를 bcrypt로 해싱합니다.
fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, PasswordConfig::bcrypt_cost())
        .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
}

/// 평문 비밀번호와 해시의 일치 여부를 확인합니다.
fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
}

/// 소셜 계정의 내부 비밀번호를 유도합니다.
///
/// 프로바이더별 비밀값을 이메일에 이어 붙인 결정적 문자열입니다.
fn derive_social_password(email: &str, provider_secret: &str) -> String {
    format!("{}{}", email, provider_secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_social_password() {
        let password = derive_social_password("tester@example.com", "provider-secret");
        assert_eq!(password, "tester@example.comprovider-secret");
    }

    #[test]
    fn test_password_hash_and_verify_roundtrip() {
        let hash = bcrypt::hash("secret123", 4).unwrap();

        assert!(verify_password("secret123", &hash).unwrap());
        assert!(!verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = bcrypt::hash("secret123", 4).unwrap();
        let second = bcrypt::hash("secret123", 4).unwrap();

        assert_ne!(first, second);
    }
}
