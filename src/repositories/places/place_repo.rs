//! MongoDB 기반 [`PlaceStore`] 구현
//!
//! 두 컬렉션을 변경하는 연산은 `ClientSession` 트랜잭션으로 실행됩니다.
//! 트랜잭션 안의 어느 쓰기라도 실패하면 `abort_transaction`으로 되돌리고
//! 원래 에러를 반환합니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    ClientSession, Collection, IndexModel,
};
use singleton_macro::repository;
use crate::{
    core::errors::AppError,
    db::Database,
    domain::entities::{places::place::Place, users::user::User},
    repositories::places::place_store::PlaceStore,
    repositories::users::user_repo::USERS_COLLECTION,
};

#[repository(name = "place", collection = "places")]
pub struct PlaceRepository {
    db: Arc<Database>,
}

fn transaction_error(action: &str, e: mongodb::error::Error) -> AppError {
    AppError::TransactionError(format!("{}: {}", action, e))
}

/// 소유자 `$push`/`$pull`이 아무 문서와도 매칭되지 않으면 트랜잭션을 중단시킵니다.
fn require_owner_matched(matched_count: u64) -> Result<(), AppError> {
    if matched_count == 0 {
        return Err(AppError::NotFound("장소 소유자를 찾을 수 없습니다".to_string()));
    }
    Ok(())
}

fn require_place_deleted(deleted_count: u64) -> Result<(), AppError> {
    if deleted_count == 0 {
        return Err(AppError::NotFound("장소를 찾을 수 없습니다".to_string()));
    }
    Ok(())
}

impl PlaceRepository {
    fn users(&self) -> Collection<User> {
        self.db.collection_named::<User>(USERS_COLLECTION)
    }

    /// 소유자별 조회와 이미지 URL 조회용 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let creator_index = IndexModel::builder()
            .keys(doc! { "creator": 1, "created_at": 1 })
            .options(IndexOptions::builder()
                .name("creator_created_at".to_string())
                .build())
            .build();

        let image_index = IndexModel::builder()
            .keys(doc! { "image": 1 })
            .options(IndexOptions::builder()
                .name("image".to_string())
                .build())
            .build();

        self.collection::<Place>()
            .create_indexes([creator_index, image_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn begin(&self) -> Result<ClientSession, AppError> {
        self.db.start_transaction()
            .await
            .map_err(|e| transaction_error("트랜잭션 시작 실패", e))
    }

    /// 스테이징 결과에 따라 커밋하거나 중단합니다.
    async fn finish(&self, mut session: ClientSession, staged: Result<(), AppError>) -> Result<(), AppError> {
        match staged {
            Ok(()) => session.commit_transaction()
                .await
                .map_err(|e| transaction_error("트랜잭션 커밋 실패", e)),
            Err(err) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    warn!("트랜잭션 중단 실패: {}", abort_err);
                }
                Err(err)
            }
        }
    }

    async fn stage_insert(&self, session: &mut ClientSession, place: &Place, place_id: ObjectId) -> Result<(), AppError> {
        self.collection::<Place>()
            .insert_one(place)
            .session(&mut *session)
            .await
            .map_err(|e| transaction_error("장소 삽입 실패", e))?;

        let linked = self.users()
            .update_one(
                doc! { "_id": place.creator },
                doc! {
                    "$push": { "places": place_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .session(&mut *session)
            .await
            .map_err(|e| transaction_error("소유자 장소 목록 갱신 실패", e))?;

        require_owner_matched(linked.matched_count)
    }

    async fn stage_remove(&self, session: &mut ClientSession, place: &Place, place_id: ObjectId) -> Result<(), AppError> {
        let deleted = self.collection::<Place>()
            .delete_one(doc! { "_id": place_id })
            .session(&mut *session)
            .await
            .map_err(|e| transaction_error("장소 삭제 실패", e))?;

        require_place_deleted(deleted.deleted_count)?;

        let unlinked = self.users()
            .update_one(
                doc! { "_id": place.creator },
                doc! {
                    "$pull": { "places": place_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .session(&mut *session)
            .await
            .map_err(|e| transaction_error("소유자 장소 목록 갱신 실패", e))?;

        require_owner_matched(unlinked.matched_count)
    }
}

#[async_trait]
impl PlaceStore for PlaceRepository {
    async fn find_place(&self, place_id: &ObjectId) -> Result<Option<Place>, AppError> {
        self.collection::<Place>()
            .find_one(doc! { "_id": place_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_places_by_creator(&self, creator: &ObjectId) -> Result<Vec<Place>, AppError> {
        let cursor = self.collection::<Place>()
            .find(doc! { "creator": creator })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_user(&self, user_id: &ObjectId) -> Result<Option<User>, AppError> {
        self.users()
            .find_one(doc! { "_id": user_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_place_by_image(&self, image_url: &str) -> Result<Option<Place>, AppError> {
        self.collection::<Place>()
            .find_one(doc! { "image": image_url })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert_with_owner(&self, mut place: Place) -> Result<Place, AppError> {
        let place_id = ObjectId::new();
        place.id = Some(place_id);

        let mut session = self.begin().await?;
        let staged = self.stage_insert(&mut session, &place, place_id).await;
        self.finish(session, staged).await?;

        debug!("장소 생성 커밋: {} (소유자 {})", place_id, place.creator);
        Ok(place)
    }

    async fn remove_with_owner(&self, place: &Place) -> Result<(), AppError> {
        let place_id = place.id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 장소는 삭제할 수 없습니다".to_string()))?;

        let mut session = self.begin().await?;
        let staged = self.stage_remove(&mut session, place, place_id).await;
        self.finish(session, staged).await?;

        debug!("장소 삭제 커밋: {} (소유자 {})", place_id, place.creator);
        Ok(())
    }

    async fn update_details(
        &self,
        place_id: &ObjectId,
        title: &str,
        description: &str,
    ) -> Result<Option<Place>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<Place>()
            .find_one_and_update(
                doc! { "_id": place_id },
                doc! {
                    "$set": {
                        "title": title,
                        "description": description,
                        "updated_at": DateTime::now(),
                    }
                },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_owner_aborts_with_not_found() {
        assert!(require_owner_matched(1).is_ok());
        assert!(matches!(require_owner_matched(0), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_missing_place_aborts_with_not_found() {
        assert!(require_place_deleted(1).is_ok());
        assert!(matches!(require_place_deleted(0), Err(AppError::NotFound(_))));
    }
}
