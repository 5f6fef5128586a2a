//! User Entity Implementation
//!
//! 장소를 소유하는 사용자 계정 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티 (`users` 컬렉션)
///
/// `places`는 이 사용자가 소유한 장소 ID 목록이며, 항상
/// `creator`가 이 사용자인 장소 문서 집합과 일치해야 합니다.
/// 이 목록은 장소 쓰기 경로(`PlaceStore`)에서만 변경됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이름
    pub name: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub image: String,
    /// 소유한 장소 ID 목록
    #[serde(default)]
    pub places: Vec<ObjectId>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 회원가입용 새 사용자 생성 (장소 목록은 비어 있음)
    pub fn new(name: String, email: String, password_hash: String, image: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            image,
            places: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 해당 장소를 소유하고 있는지 확인
    pub fn owns(&self, place_id: &ObjectId) -> bool {
        self.places.contains(place_id)
    }
}
