//! # 장소 쓰기 경로 조정자
//!
//! 장소 생성/삭제는 장소 문서와 소유자의 `places` 목록을 함께 변경해야 합니다.
//! 이 서비스는 외부 호출(지오코딩, 이미지 업로드)을 트랜잭션 밖에서 먼저 끝낸 뒤
//! [`PlaceStore`]의 쌍으로 묶인 연산 하나로 두 컬렉션을 변경합니다.
//!
//! ## 생성
//!
//! ```text
//! 업로드 URL 확인      ──실패──▶ 422 (관리 대상 아님) / 409 (다른 장소가 사용 중)
//!        │
//! geocode(address) ──실패──▶ 에러 (기록 없음, 업로드 없음)
//!        │
//! find_user(creator) ──없음──▶ NotFound (기록 없음)
//!        │
//! store(blob)        ──실패──▶ 에러 (기록 없음)
//!        │
//! insert_with_owner  ──실패──▶ 에러 + 방금 업로드한 이미지 삭제 시도
//! ```
//!
//! ## 삭제
//!
//! ```text
//! find_place_with_owner ──없음──▶ NotFound (기록 없음)
//!        │
//! remove_with_owner     ──실패──▶ 에러 (두 컬렉션 그대로)
//!        │
//! release(image)        ──실패──▶ warn 로그만 남김 (다른 장소가 쓰는 이미지는 건너뜀)
//! ```
//!
//! 트레이트 객체 조합으로 생성되므로 `#[service]` 대신 `main`에서
//! `ServiceLocator::set`으로 등록됩니다.

use std::sync::Arc;
use log::{debug, info, warn};
use mongodb::bson::oid::ObjectId;
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::{
        dto::places::{CreatePlaceRequest, UpdatePlaceRequest},
        entities::places::place::Place,
        storage::ImageSource,
    },
    repositories::places::PlaceStore,
    services::{geo::Geocoder, storage::BlobStore},
    utils::string_utils::parse_object_id,
};

pub struct PlaceService {
    store: Arc<dyn PlaceStore>,
    geocoder: Arc<dyn Geocoder>,
    blobs: Arc<dyn BlobStore>,
}

impl PlaceService {
    pub fn new(store: Arc<dyn PlaceStore>, geocoder: Arc<dyn Geocoder>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { store, geocoder, blobs }
    }

    pub async fn get_place(&self, place_id: &str) -> Result<Place, AppError> {
        let place_id = parse_object_id(place_id, "place id")?;

        self.store
            .find_place(&place_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find place for the provided id.".to_string()))
    }

    /// 사용자가 없으면 `NotFound`, 장소가 없으면 빈 목록을 반환합니다.
    pub async fn places_by_user(&self, user_id: &str) -> Result<Vec<Place>, AppError> {
        let user_id = parse_object_id(user_id, "user id")?;

        if self.store.find_user(&user_id).await?.is_none() {
            return Err(AppError::NotFound("Could not find user for the provided id.".to_string()));
        }

        self.store.find_places_by_creator(&user_id).await
    }

    /// 장소를 생성하고 소유자의 장소 목록에 연결합니다.
    ///
    /// `request.creator`가 주어지면 요청한 사용자와 같아야 합니다.
    pub async fn create_place(
        &self,
        request: CreatePlaceRequest,
        requester: &ObjectId,
        image: ImageSource,
    ) -> Result<Place, AppError> {
        request.validate()?;

        let creator = match request.creator.as_deref() {
            Some(creator) => {
                let creator = parse_object_id(creator, "creator id")?;
                if &creator != requester {
                    return Err(AppError::AuthorizationError(
                        "You are not allowed to create places for another user.".to_string()
                    ));
                }
                creator
            }
            None => *requester,
        };

        let image = match image {
            ImageSource::Uploaded(url) => ImageSource::Uploaded(self.claim_uploaded_image(url).await?),
            blob => blob,
        };

        let location = self.geocoder.geocode(&request.address).await?;

        if self.store.find_user(&creator).await?.is_none() {
            return Err(AppError::NotFound("Could not find user for the provided id.".to_string()));
        }

        let (image_url, uploaded) = match image {
            ImageSource::Uploaded(url) => (url, false),
            ImageSource::Blob(blob) => (self.blobs.store(blob).await?, true),
        };

        let place = Place::new(
            request.title.trim().to_string(),
            request.description,
            request.address.trim().to_string(),
            location,
            image_url.clone(),
            creator,
        );

        match self.store.insert_with_owner(place).await {
            Ok(created) => {
                info!("장소 생성: {:?} (소유자 {})", created.id_string(), creator);
                Ok(created)
            }
            Err(err) => {
                if uploaded {
                    self.release_image(&image_url).await;
                }
                Err(err)
            }
        }
    }

    /// 소유자만 제목과 설명을 변경할 수 있습니다.
    pub async fn update_place(
        &self,
        place_id: &str,
        requester: &ObjectId,
        request: UpdatePlaceRequest,
    ) -> Result<Place, AppError> {
        request.validate()?;

        let place = self.get_place(place_id).await?;
        let place_id = place.id
            .ok_or_else(|| AppError::InternalError("저장된 장소에 ID가 없습니다".to_string()))?;

        if !place.is_owned_by(requester) {
            return Err(AppError::AuthorizationError("You are not allowed to edit this place.".to_string()));
        }

        self.store
            .update_details(&place_id, request.title.trim(), &request.description)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find place for the provided id.".to_string()))
    }

    /// 장소를 삭제하고 소유자의 장소 목록에서 제거한 뒤 이미지를 정리합니다.
    pub async fn delete_place(&self, place_id: &str, requester: &ObjectId) -> Result<(), AppError> {
        let place_id = parse_object_id(place_id, "place id")?;

        let found = self.store
            .find_place_with_owner(&place_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Could not find place for this id.".to_string()))?;

        if found.owner.is_none() {
            return Err(AppError::NotFound("Could not find the owner of this place.".to_string()));
        }

        if !found.place.is_owned_by(requester) {
            return Err(AppError::AuthorizationError("You are not allowed to delete this place.".to_string()));
        }

        self.store.remove_with_owner(&found.place).await?;
        info!("장소 삭제: {} (소유자 {})", place_id, found.place.creator);

        match self.store.find_place_by_image(&found.place.image).await {
            Ok(None) => self.release_image(&found.place.image).await,
            Ok(Some(other)) => {
                debug!("다른 장소가 사용 중인 이미지는 삭제하지 않습니다: {:?}", other.id_string());
            }
            Err(e) => warn!("이미지 사용 여부 확인 실패, 삭제 생략 ({}): {}", found.place.image, e),
        }

        Ok(())
    }

    /// 클라이언트가 Pre-signed URL로 올린 이미지가 이 저장소의 업로드 접두사 아래에 있고
    /// 다른 장소가 쓰지 않는지 확인합니다.
    async fn claim_uploaded_image(&self, url: String) -> Result<String, AppError> {
        let url = url.trim().to_string();

        if !self.blobs.is_managed_url(&url) {
            return Err(AppError::ValidationError(
                "이미지는 업로드 URL로 올린 오브젝트여야 합니다".to_string()
            ));
        }

        if self.store.find_place_by_image(&url).await?.is_some() {
            return Err(AppError::ConflictError("이미 다른 장소에서 사용 중인 이미지입니다".to_string()));
        }

        Ok(url)
    }

    async fn release_image(&self, image_url: &str) {
        if let Err(e) = self.blobs.release(image_url).await {
            warn!("이미지 삭제 실패 ({}): {}", image_url, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::entities::places::place::Location;
    use crate::domain::entities::users::user::User;
    use crate::domain::storage::ImageBlob;
    use crate::repositories::places::memory::InMemoryPlaceStore;
    use crate::services::geo::MockGeocoder;
    use crate::services::storage::MockBlobStore;

    const ADDRESS: &str = "20 W 34th St, New York, NY 10001";
    const EMPIRE_STATE: Location = Location { lat: 40.7484474, lng: -73.9871516 };
    const UPLOAD_PREFIX: &str = "https://places-images.s3.amazonaws.com/images/";
    const IMAGE_URL: &str = "https://places-images.s3.amazonaws.com/images/empire.jpg";
    const OTHER_IMAGE_URL: &str = "https://places-images.s3.amazonaws.com/images/flatiron.jpg";

    fn request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Empire State Building".to_string(),
            description: "One of the most famous sky scrapers in the world!".to_string(),
            address: ADDRESS.to_string(),
            creator: None,
        }
    }

    fn geocoder_returning(location: Location) -> MockGeocoder {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_geocode()
            .withf(|address| address.to_string() == ADDRESS)
            .returning(move |_| Ok(location));
        geocoder
    }

    fn unused_geocoder() -> MockGeocoder {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_geocode().times(0);
        geocoder
    }

    fn blobs() -> MockBlobStore {
        let mut blobs = MockBlobStore::new();
        blobs
            .expect_is_managed_url()
            .returning(|url| url.starts_with(UPLOAD_PREFIX) && url.len() > UPLOAD_PREFIX.len());
        blobs
    }

    fn unused_blobs() -> MockBlobStore {
        let mut blobs = blobs();
        blobs.expect_store().times(0);
        blobs.expect_release().times(0);
        blobs
    }

    fn service(store: &Arc<InMemoryPlaceStore>, geocoder: MockGeocoder, blobs: MockBlobStore) -> PlaceService {
        PlaceService::new(store.clone(), Arc::new(geocoder), Arc::new(blobs))
    }

    async fn seed_place(store: &InMemoryPlaceStore, owner: ObjectId) -> Place {
        store
            .insert_with_owner(Place::new(
                "Empire State Building".to_string(),
                "One of the most famous sky scrapers in the world!".to_string(),
                ADDRESS.to_string(),
                EMPIRE_STATE,
                IMAGE_URL.to_string(),
                owner,
            ))
            .await
            .unwrap()
    }

    /// 소유자 조회 직후 소유자가 삭제되는 저장소
    struct VanishingOwnerStore {
        inner: Arc<InMemoryPlaceStore>,
    }

    #[async_trait]
    impl PlaceStore for VanishingOwnerStore {
        async fn find_place(&self, place_id: &ObjectId) -> Result<Option<Place>, AppError> {
            self.inner.find_place(place_id).await
        }

        async fn find_places_by_creator(&self, creator: &ObjectId) -> Result<Vec<Place>, AppError> {
            self.inner.find_places_by_creator(creator).await
        }

        async fn find_user(&self, user_id: &ObjectId) -> Result<Option<User>, AppError> {
            let user = self.inner.find_user(user_id).await?;
            self.inner.remove_user(user_id);
            Ok(user)
        }

        async fn find_place_by_image(&self, image_url: &str) -> Result<Option<Place>, AppError> {
            self.inner.find_place_by_image(image_url).await
        }

        async fn insert_with_owner(&self, place: Place) -> Result<Place, AppError> {
            self.inner.insert_with_owner(place).await
        }

        async fn remove_with_owner(&self, place: &Place) -> Result<(), AppError> {
            self.inner.remove_with_owner(place).await
        }

        async fn update_details(
            &self,
            place_id: &ObjectId,
            title: &str,
            description: &str,
        ) -> Result<Option<Place>, AppError> {
            self.inner.update_details(place_id, title, description).await
        }
    }

    #[actix_web::test]
    async fn test_create_links_place_to_owner_with_exact_coordinates() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let service = service(&store, geocoder_returning(EMPIRE_STATE), unused_blobs());

        let place = service
            .create_place(request(), &owner, ImageSource::Uploaded(IMAGE_URL.to_string()))
            .await
            .unwrap();

        let place_id = place.id.unwrap();
        assert_eq!(place.creator, owner);
        assert_eq!(place.location.lat, 40.7484474);
        assert_eq!(place.location.lng, -73.9871516);
        assert_eq!(place.image, IMAGE_URL);
        assert!(store.user(&owner).unwrap().owns(&place_id));
        assert_eq!(store.place_count(), 1);
    }

    #[actix_web::test]
    async fn test_create_uploads_blob_and_stores_returned_url() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");

        let mut blobs = blobs();
        blobs
            .expect_store()
            .times(1)
            .returning(|_| Ok(IMAGE_URL.to_string()));
        blobs.expect_release().times(0);

        let service = service(&store, geocoder_returning(EMPIRE_STATE), blobs);
        let blob = ImageBlob {
            bytes: vec![0xFF, 0xD8, 0xFF],
            content_type: "image/jpeg".to_string(),
            file_name: Some("empire.jpg".to_string()),
        };

        let place = service.create_place(request(), &owner, ImageSource::Blob(blob)).await.unwrap();

        assert_eq!(place.image, IMAGE_URL);
    }

    #[actix_web::test]
    async fn test_create_for_unknown_user_writes_nothing() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let service = service(&store, geocoder_returning(EMPIRE_STATE), unused_blobs());

        let result = service
            .create_place(request(), &ObjectId::new(), ImageSource::Uploaded(IMAGE_URL.to_string()))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.place_count(), 0);
        assert_eq!(store.committed(), 0);
    }

    #[actix_web::test]
    async fn test_geocoding_failure_has_no_side_effects() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");

        let mut geocoder = MockGeocoder::new();
        geocoder.expect_geocode().times(1).returning(|_| {
            Err(AppError::ValidationError("Could not find location for the specified address.".to_string()))
        });

        let service = service(&store, geocoder, unused_blobs());
        let blob = ImageBlob {
            bytes: vec![1],
            content_type: "image/png".to_string(),
            file_name: None,
        };

        let result = service.create_place(request(), &owner, ImageSource::Blob(blob)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.place_count(), 0);
        assert!(store.user(&owner).unwrap().places.is_empty());
    }

    #[actix_web::test]
    async fn test_failed_transaction_releases_uploaded_blob() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        store.fail_transactions(true);

        let mut blobs = blobs();
        blobs.expect_store().times(1).returning(|_| Ok(IMAGE_URL.to_string()));
        blobs
            .expect_release()
            .withf(|url| url.to_string() == IMAGE_URL)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(&store, geocoder_returning(EMPIRE_STATE), blobs);
        let blob = ImageBlob {
            bytes: vec![1],
            content_type: "image/png".to_string(),
            file_name: None,
        };

        let result = service.create_place(request(), &owner, ImageSource::Blob(blob)).await;

        assert!(matches!(result, Err(AppError::TransactionError(_))));
        assert_eq!(store.place_count(), 0);
        assert!(store.user(&owner).unwrap().places.is_empty());
    }

    #[actix_web::test]
    async fn test_failed_transaction_keeps_client_uploaded_image() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        store.fail_transactions(true);

        let service = service(&store, geocoder_returning(EMPIRE_STATE), unused_blobs());

        let result = service
            .create_place(request(), &owner, ImageSource::Uploaded(IMAGE_URL.to_string()))
            .await;

        assert!(matches!(result, Err(AppError::TransactionError(_))));
        assert_eq!(store.place_count(), 0);
    }

    #[actix_web::test]
    async fn test_create_for_another_user_is_forbidden() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let other = store.seed_user("Manu", "manu@example.com");
        let service = service(&store, unused_geocoder(), unused_blobs());

        let mut request = request();
        request.creator = Some(other.to_hex());

        let result = service
            .create_place(request, &owner, ImageSource::Uploaded(IMAGE_URL.to_string()))
            .await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
        assert_eq!(store.place_count(), 0);
    }

    #[actix_web::test]
    async fn test_invalid_request_is_rejected_before_geocoding() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let service = service(&store, unused_geocoder(), unused_blobs());

        let mut request = request();
        request.description = "tall".to_string();

        let result = service
            .create_place(request, &owner, ImageSource::Uploaded(IMAGE_URL.to_string()))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_delete_removes_place_from_both_collections() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let place = seed_place(&store, owner).await;

        let mut blobs = blobs();
        blobs
            .expect_release()
            .withf(|url| url.to_string() == IMAGE_URL)
            .times(1)
            .returning(|_| Ok(()));

        let service = service(&store, unused_geocoder(), blobs);
        let place_id = place.id_string().unwrap();

        service.delete_place(&place_id, &owner).await.unwrap();

        assert_eq!(store.place_count(), 0);
        assert!(store.user(&owner).unwrap().places.is_empty());
        assert!(matches!(service.get_place(&place_id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_failed_delete_transaction_leaves_both_collections_unchanged() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let place = seed_place(&store, owner).await;
        store.fail_transactions(true);

        let service = service(&store, unused_geocoder(), unused_blobs());

        let result = service.delete_place(&place.id_string().unwrap(), &owner).await;

        assert!(matches!(result, Err(AppError::TransactionError(_))));
        assert_eq!(store.place_count(), 1);
        assert!(store.user(&owner).unwrap().owns(&place.id.unwrap()));
    }

    #[actix_web::test]
    async fn test_delete_unknown_place_is_not_found_without_writes() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        seed_place(&store, owner).await;
        let committed = store.committed();

        let service = service(&store, unused_geocoder(), unused_blobs());

        let result = service.delete_place(&ObjectId::new().to_hex(), &owner).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.committed(), committed);
        assert_eq!(store.place_count(), 1);
    }

    #[actix_web::test]
    async fn test_delete_with_missing_owner_is_not_found_without_writes() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let place = seed_place(&store, owner).await;
        store.remove_user(&owner);
        let committed = store.committed();

        let service = service(&store, unused_geocoder(), unused_blobs());

        let result = service.delete_place(&place.id_string().unwrap(), &owner).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.committed(), committed);
        assert_eq!(store.place_count(), 1);
    }

    #[actix_web::test]
    async fn test_delete_by_another_user_is_forbidden() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let other = store.seed_user("Manu", "manu@example.com");
        let place = seed_place(&store, owner).await;

        let service = service(&store, unused_geocoder(), unused_blobs());

        let result = service.delete_place(&place.id_string().unwrap(), &other).await;

        assert!(matches!(result, Err(AppError::AuthorizationError(_))));
        assert_eq!(store.place_count(), 1);
    }

    #[actix_web::test]
    async fn test_image_release_failure_does_not_fail_delete() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let place = seed_place(&store, owner).await;

        let mut blobs = blobs();
        blobs
            .expect_release()
            .times(1)
            .returning(|_| Err(AppError::ExternalServiceError("S3 unavailable".to_string())));

        let service = service(&store, unused_geocoder(), blobs);

        assert!(service.delete_place(&place.id_string().unwrap(), &owner).await.is_ok());
        assert_eq!(store.place_count(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_place_id_is_validation_error() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let service = service(&store, unused_geocoder(), unused_blobs());

        assert!(matches!(service.delete_place("p1", &owner).await, Err(AppError::ValidationError(_))));
        assert!(matches!(service.get_place("p1").await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_places_by_user() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let without_places = store.seed_user("Manu", "manu@example.com");
        let place = seed_place(&store, owner).await;

        let service = service(&store, unused_geocoder(), unused_blobs());

        let places = service.places_by_user(&owner.to_hex()).await.unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].id, place.id);

        assert!(service.places_by_user(&without_places.to_hex()).await.unwrap().is_empty());
        assert!(matches!(
            service.places_by_user(&ObjectId::new().to_hex()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_update_changes_details_only_for_owner() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let other = store.seed_user("Manu", "manu@example.com");
        let place = seed_place(&store, owner).await;
        let place_id = place.id_string().unwrap();

        let service = service(&store, unused_geocoder(), unused_blobs());
        let update = UpdatePlaceRequest {
            title: "Empire State".to_string(),
            description: "Art deco landmark".to_string(),
        };

        assert!(matches!(
            service.update_place(&place_id, &other, update.clone()).await,
            Err(AppError::AuthorizationError(_))
        ));

        let updated = service.update_place(&place_id, &owner, update).await.unwrap();
        assert_eq!(updated.title, "Empire State");
        assert_eq!(updated.description, "Art deco landmark");
        assert_eq!(updated.creator, owner);
        assert_eq!(updated.location, EMPIRE_STATE);
    }

    #[actix_web::test]
    async fn test_owner_removed_before_transaction_writes_nothing_and_releases_blob() {
        let inner = Arc::new(InMemoryPlaceStore::new());
        let owner = inner.seed_user("Max", "max@example.com");
        let store = Arc::new(VanishingOwnerStore { inner: inner.clone() });

        let mut blobs = blobs();
        blobs.expect_store().times(1).returning(|_| Ok(IMAGE_URL.to_string()));
        blobs
            .expect_release()
            .withf(|url| url.to_string() == IMAGE_URL)
            .times(1)
            .returning(|_| Ok(()));

        let service = PlaceService::new(store, Arc::new(geocoder_returning(EMPIRE_STATE)), Arc::new(blobs));
        let blob = ImageBlob {
            bytes: vec![1],
            content_type: "image/png".to_string(),
            file_name: None,
        };

        let result = service.create_place(request(), &owner, ImageSource::Blob(blob)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(inner.place_count(), 0);
        assert_eq!(inner.committed(), 0);
    }

    #[actix_web::test]
    async fn test_create_rejects_image_outside_upload_prefix() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let service = service(&store, unused_geocoder(), unused_blobs());

        for image in ["not a url", "https://evil.example.com/images/empire.jpg", UPLOAD_PREFIX, ""] {
            let result = service
                .create_place(request(), &owner, ImageSource::Uploaded(image.to_string()))
                .await;

            assert!(matches!(result, Err(AppError::ValidationError(_))), "{}", image);
        }
        assert_eq!(store.place_count(), 0);
    }

    #[actix_web::test]
    async fn test_create_rejects_image_of_another_place() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let victim = store.seed_user("Max", "max@example.com");
        let attacker = store.seed_user("Manu", "manu@example.com");
        let victim_place = seed_place(&store, victim).await;

        let service = service(&store, unused_geocoder(), unused_blobs());

        let result = service
            .create_place(request(), &attacker, ImageSource::Uploaded(victim_place.image.clone()))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.place_count(), 1);
        assert!(store.user(&attacker).unwrap().places.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_keeps_image_still_referenced_by_another_place() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        let other = store.seed_user("Manu", "manu@example.com");
        let place = seed_place(&store, owner).await;
        seed_place(&store, other).await;

        let service = service(&store, unused_geocoder(), unused_blobs());

        service.delete_place(&place.id_string().unwrap(), &owner).await.unwrap();

        assert_eq!(store.place_count(), 1);
    }

    #[actix_web::test]
    async fn test_create_accepts_fresh_upload_under_prefix() {
        let store = Arc::new(InMemoryPlaceStore::new());
        let owner = store.seed_user("Max", "max@example.com");
        seed_place(&store, owner).await;

        let service = service(&store, geocoder_returning(EMPIRE_STATE), unused_blobs());

        let place = service
            .create_place(request(), &owner, ImageSource::Uploaded(format!(" {} ", OTHER_IMAGE_URL)))
            .await
            .unwrap();

        assert_eq!(place.image, OTHER_IMAGE_URL);
        assert_eq!(store.user(&owner).unwrap().places.len(), 2);
    }
}
