//! JWT 클레임 모델
//!
//! 세 종류의 토큰(활성화, 액세스, 리프레시)에 실리는 클레임 구조를
//! 정의합니다. 모든 클레임은 초 단위 UNIX 타임스탬프 `iat`/`exp`를
//! 포함합니다.

use serde::{Deserialize, Serialize};

/// 계정 활성화 토큰 클레임
///
/// 회원가입 시점에는 사용자를 DB에 만들지 않고, 계정 생성에 필요한
/// 모든 정보를 토큰 자체에 담아 이메일로 전달합니다. 비밀번호는
/// 평문이 아닌 bcrypt 해시로 실립니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationClaims {
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 발급 시각 (UNIX seconds)
    pub iat: i64,
    /// 만료 시각 (UNIX seconds)
    pub exp: i64,
}

/// 액세스/리프레시 토큰 클레임
///
/// 사용자 식별자만 담습니다. 역할 등 나머지 정보는 요청 처리 시점에
/// DB에서 조회합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    /// 사용자 ID (ObjectId hex 문자열)
    pub id: String,
    /// 발급 시각 (UNIX seconds)
    pub iat: i64,
    /// 만료 시각 (UNIX seconds)
    pub exp: i64,
}
