//! 장소/소유자 작업 단위 (Unit of Work)
//!
//! `Place.creator`와 `User.places`의 양방향 연결은 데이터베이스가 아니라
//! 애플리케이션이 유지해야 합니다. 이 트레이트는 두 컬렉션을 **함께**
//! 변경하는 연산만 노출하므로, 구현체를 통해서는 한쪽 컬렉션만 변경하여
//! 연결을 깨뜨릴 수 없습니다.
//!
//! | 연산 | 변경 대상 |
//! |------|-----------|
//! | [`PlaceStore::insert_with_owner`] | 장소 삽입 + 소유자 `places`에 `$push` |
//! | [`PlaceStore::remove_with_owner`] | 장소 삭제 + 소유자 `places`에서 `$pull` |
//! | [`PlaceStore::update_details`] | 제목/설명만 변경 (연결 필드는 불변) |
//!
//! 두 컬렉션을 변경하는 연산은 하나의 트랜잭션으로 실행되어야 하며,
//! 실패 시 두 컬렉션 모두 호출 이전 상태로 남아야 합니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::places::place::Place;
use crate::domain::entities::users::user::User;

/// 소유자와 함께 조회한 장소
#[derive(Debug, Clone)]
pub struct PlaceWithOwner {
    pub place: Place,
    /// `creator`가 가리키는 사용자 (연결이 깨진 경우 `None`)
    pub owner: Option<User>,
}

#[async_trait]
pub trait PlaceStore: Send + Sync {
    async fn find_place(&self, place_id: &ObjectId) -> Result<Option<Place>, AppError>;

    /// 소유자의 장소 목록 (생성 순)
    async fn find_places_by_creator(&self, creator: &ObjectId) -> Result<Vec<Place>, AppError>;

    async fn find_user(&self, user_id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 이미지 URL을 사용 중인 장소 하나
    async fn find_place_by_image(&self, image_url: &str) -> Result<Option<Place>, AppError>;

    /// 장소와 소유자를 함께 조회합니다.
    async fn find_place_with_owner(&self, place_id: &ObjectId) -> Result<Option<PlaceWithOwner>, AppError> {
        let Some(place) = self.find_place(place_id).await? else {
            return Ok(None);
        };
        let owner = self.find_user(&place.creator).await?;

        Ok(Some(PlaceWithOwner { place, owner }))
    }

    /// 한 트랜잭션 안에서 장소를 삽입하고 소유자의 `places`에 ID를 추가합니다.
    ///
    /// 새 ID를 부여한 장소를 반환합니다. 소유자가 트랜잭션 시점에 존재하지
    /// 않으면 `NotFound`로 중단되며 아무것도 기록되지 않습니다.
    async fn insert_with_owner(&self, place: Place) -> Result<Place, AppError>;

    /// 한 트랜잭션 안에서 장소를 삭제하고 소유자의 `places`에서 ID를 제거합니다.
    async fn remove_with_owner(&self, place: &Place) -> Result<(), AppError>;

    /// 제목과 설명을 변경하고 변경된 장소를 반환합니다. 장소가 없으면 `None`.
    async fn update_details(
        &self,
        place_id: &ObjectId,
        title: &str,
        description: &str,
    ) -> Result<Option<Place>, AppError>;
}
