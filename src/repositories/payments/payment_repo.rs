//! # 결제 리포지토리 구현
//!
//! 결제(주문) 엔티티의 데이터 액세스 계층입니다. 이 서비스는 주문
//! 내역 조회만 담당하므로 읽기 연산만 제공합니다.

use futures_util::TryStreamExt;
use mongodb::{Collection, bson::doc};
use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::core::registry::ServiceLocator;
use crate::db::Database;
use crate::domain::entities::payment::Payment;
use crate::errors::AppError;

/// 결제 데이터 액세스 리포지토리
///
/// ## 저장소 구성
///
/// - **컬렉션명**: `payments`
pub struct PaymentRepository {
    db: Arc<Database>,
}

impl PaymentRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        static INSTANCE: Lazy<Arc<PaymentRepository>> = Lazy::new(|| {
            Arc::new(PaymentRepository {
                db: ServiceLocator::get::<Database>(),
            })
        });

        Arc::clone(&INSTANCE)
    }

    fn collection(&self) -> Collection<Payment> {
        self.db.get_database().collection("payments")
    }

    /// 특정 사용자의 주문 내역을 조회합니다.
    ///
    /// `user_id`는 사용자 ObjectId의 hex 문자열이며, 결제 문서에
    /// 문자열 그대로 저장되어 있습니다.
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Payment>, AppError> {
        let mut cursor = self
            .collection()
            .find(doc! { "user_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut payments = Vec::new();
        while let Some(payment) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            payments.push(payment);
        }

        Ok(payments)
    }
}
