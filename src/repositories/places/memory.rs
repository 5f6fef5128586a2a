//! 테스트용 인메모리 [`PlaceStore`]
//!
//! 트랜잭션 연산은 상태 사본 위에서 실행한 뒤 성공했을 때만 교체합니다.
//! `fail_transactions(true)`로 커밋 실패를 주입하면 아무것도 바뀌지 않습니다.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::AppError;
use crate::domain::entities::places::place::Place;
use crate::domain::entities::users::user::User;
use super::place_store::PlaceStore;

#[derive(Debug, Clone, Default)]
struct State {
    users: HashMap<ObjectId, User>,
    places: Vec<Place>,
}

#[derive(Debug, Default)]
pub struct InMemoryPlaceStore {
    state: Mutex<State>,
    fail_transactions: Mutex<bool>,
    committed: Mutex<usize>,
}

impl InMemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 사용자를 추가하고 ID를 반환합니다.
    pub fn seed_user(&self, name: &str, email: &str) -> ObjectId {
        let mut user = User::new(name.to_string(), email.to_string(), "hash".to_string(), String::new());
        let id = ObjectId::new();
        user.id = Some(id);
        self.state().users.insert(id, user);
        id
    }

    pub fn remove_user(&self, id: &ObjectId) {
        self.state().users.remove(id);
    }

    pub fn user(&self, id: &ObjectId) -> Option<User> {
        self.state().users.get(id).cloned()
    }

    pub fn place_count(&self) -> usize {
        self.state().places.len()
    }

    pub fn fail_transactions(&self, fail: bool) {
        *self.fail_transactions.lock().unwrap_or_else(PoisonError::into_inner) = fail;
    }

    /// 커밋된 트랜잭션 수
    pub fn committed(&self) -> usize {
        *self.committed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transact<T>(&self, staged: impl FnOnce(&mut State) -> Result<T, AppError>) -> Result<T, AppError> {
        let mut state = self.state();
        let mut draft = state.clone();
        let value = staged(&mut draft)?;

        if *self.fail_transactions.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(AppError::TransactionError("injected commit failure".to_string()));
        }

        *state = draft;
        *self.committed.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(value)
    }
}

#[async_trait]
impl PlaceStore for InMemoryPlaceStore {
    async fn find_place(&self, place_id: &ObjectId) -> Result<Option<Place>, AppError> {
        Ok(self.state().places.iter().find(|p| p.id.as_ref() == Some(place_id)).cloned())
    }

    async fn find_places_by_creator(&self, creator: &ObjectId) -> Result<Vec<Place>, AppError> {
        Ok(self.state().places.iter().filter(|p| &p.creator == creator).cloned().collect())
    }

    async fn find_user(&self, user_id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(self.user(user_id))
    }

    async fn find_place_by_image(&self, image_url: &str) -> Result<Option<Place>, AppError> {
        Ok(self.state().places.iter().find(|p| p.image == image_url).cloned())
    }

    async fn insert_with_owner(&self, mut place: Place) -> Result<Place, AppError> {
        let place_id = ObjectId::new();
        place.id = Some(place_id);

        self.transact(|state| {
            state.places.push(place.clone());
            let owner = state.users.get_mut(&place.creator)
                .ok_or_else(|| AppError::NotFound("owner".to_string()))?;
            owner.places.push(place_id);
            owner.updated_at = DateTime::now();
            Ok(place)
        })
    }

    async fn remove_with_owner(&self, place: &Place) -> Result<(), AppError> {
        let place_id = place.id
            .ok_or_else(|| AppError::InternalError("unsaved place".to_string()))?;

        self.transact(|state| {
            let before = state.places.len();
            state.places.retain(|p| p.id != Some(place_id));
            if state.places.len() == before {
                return Err(AppError::NotFound("place".to_string()));
            }
            let owner = state.users.get_mut(&place.creator)
                .ok_or_else(|| AppError::NotFound("owner".to_string()))?;
            owner.places.retain(|id| id != &place_id);
            Ok(())
        })
    }

    async fn update_details(
        &self,
        place_id: &ObjectId,
        title: &str,
        description: &str,
    ) -> Result<Option<Place>, AppError> {
        let mut state = self.state();
        Ok(state.places.iter_mut()
            .find(|p| p.id.as_ref() == Some(place_id))
            .map(|place| {
                place.title = title.to_string();
                place.description = description.to_string();
                place.updated_at = DateTime::now();
                place.clone()
            }))
    }
}
