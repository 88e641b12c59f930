//! Payment Entity Implementation
//!
//! 결제(주문) 엔티티입니다. 이 서비스에서는 주문 내역 조회 전용으로
//! 사용되며, 결제 생성/갱신은 담당하지 않습니다.

use mongodb::bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::CartItem;

/// 결제(주문) 엔티티
///
/// 주문 확정 시점의 장바구니 스냅샷과 배송지 정보를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주문한 사용자의 ID (hex 문자열)
    pub user_id: String,
    /// 주문자 이름
    pub name: String,
    /// 주문자 이메일
    pub email: String,
    /// 외부 결제 시스템의 결제 식별자
    #[serde(rename = "paymentID")]
    pub payment_id: String,
    /// 배송지 정보 (외부 결제 시스템이 전달한 원본 구조)
    pub address: Document,
    /// 주문 시점의 장바구니 스냅샷
    #[serde(default)]
    pub cart: Vec<CartItem>,
    /// 배송 완료 여부
    #[serde(default)]
    pub status: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}
