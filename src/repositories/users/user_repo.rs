//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `users` 컬렉션에 대한 CRUD 연산과 유니크 인덱스 관리를
//! 제공합니다.
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
//! 다음과 같은 에러 상황을 처리합니다:
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
//! - **ConflictError**: 이메일 유니크 제약 위반

use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장소 구성
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique), created_at(desc)
pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    ///
    /// 최초 호출 시 `ServiceLocator`에서 `Database`를 주입받아
    /// 인스턴스를 생성합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<UserRepository>> = Lazy::new(|| {
            Arc::new(UserRepository {
                db: ServiceLocator::get::<Database>(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// 이메일로 사용자를 조회합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - 해당 이메일의 사용자
    /// * `Ok(None)` - 사용자가 존재하지 않음
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id.".to_string()))?;

        let user = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    /// 모든 사용자를 조회합니다. (관리자 전용 연산)
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let mut cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            users.push(user);
        }

        Ok(users)
    }

    /// 새 사용자를 생성합니다.
    ///
    /// MongoDB가 ObjectId를 자동 할당하며, 생성된 ID가 채워진
    /// 사용자를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이메일 유니크 인덱스 위반.
    ///   사전 중복 검사와 삽입 사이의 경합을 인덱스가 막아줍니다.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection().insert_one(&user).await.map_err(|e| {
            let message = e.to_string();
            if message.contains("E11000") {
                AppError::ConflictError("This email already exists.".to_string())
            } else {
                AppError::DatabaseError(message)
            }
        })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보를 부분 업데이트합니다.
    ///
    /// `$set` 연산자로 지정된 필드만 변경하며, `updated_at`을 함께
    /// 갱신합니다. `ReturnDocument::After` 옵션으로 갱신된 문서를
    /// 반환합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update(&self, id: &str, mut update_doc: Document) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id.".to_string()))?;

        update_doc.insert("updated_at", DateTime::now());

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_user = self
            .collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(updated_user)
    }

    /// 사용자 ID로 비밀번호 해시를 교체합니다.
    ///
    /// 비밀번호 재설정 플로우에서 사용됩니다.
    pub async fn update_password_by_id(
        &self,
        id: &str,
        password_hash: &str,
    ) -> Result<Option<User>, AppError> {
        self.update(id, doc! { "password": password_hash }).await
    }

    /// 사용자를 영구 삭제합니다. (관리자 전용 연산)
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - 사용자가 삭제됨
    /// * `Ok(false)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id.".to_string()))?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 서버 기동 시 1회 호출되며, 이메일 유니크 제약을 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
