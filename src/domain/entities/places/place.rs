//! Place Entity Implementation
//!
//! 사용자가 등록한 장소(주소, 좌표, 이미지) 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 주소를 지오코딩하여 얻은 좌표
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// 장소 엔티티 (`places` 컬렉션)
///
/// `creator`는 반드시 존재하는 사용자를 가리키며, 그 사용자의 `places`
/// 목록에 이 장소의 ID가 포함되어 있어야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub address: String,
    /// 주소에서 파생된 좌표
    pub location: Location,
    /// 이미지 오브젝트 URL
    pub image: String,
    /// 소유자 사용자 ID
    pub creator: ObjectId,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Place {
    /// 아직 저장되지 않은 새 장소를 생성합니다. ID는 저장 시점에 부여됩니다.
    pub fn new(
        title: String,
        description: String,
        address: String,
        location: Location,
        image: String,
        creator: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            description,
            address,
            location,
            image,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 이 장소의 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &ObjectId) -> bool {
        &self.creator == user_id
    }
}
