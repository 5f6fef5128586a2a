//! # Place HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/places/{pid}` | - | 200 OK |
//! | `GET` | `/api/places/user/{uid}` | - | 200 OK |
//! | `POST` | `/api/places` | Bearer | 201 Created |
//! | `PATCH` | `/api/places/{pid}` | Bearer | 200 OK |
//! | `DELETE` | `/api/places/{pid}` | Bearer | 200 OK |
//!
//! 장소 생성은 `multipart/form-data` 본문을 받습니다. `image`는 파일 파트이거나,
//! Pre-signed URL로 미리 업로드한 오브젝트 URL을 담은 텍스트 파트입니다.
//! `Content-Type: application/json` 요청은 `image`에 오브젝트 URL을 담은 JSON
//! 본문으로 처리합니다.

use actix_multipart::{Field, Multipart};
use actix_web::{delete, get, guard::GuardContext, http::header, patch, post, web, HttpResponse};
use futures_util::TryStreamExt;
use validator::Validate;
use crate::{
    core::{errors::AppError, registry::ServiceLocator},
    domain::{
        auth::authenticated_user::AuthenticatedUser,
        dto::places::{
            CreatePlaceRequest, CreatePlaceWithImageUrl, MessageResponse, PlaceEnvelope, PlacesResponse,
            UpdatePlaceRequest,
        },
        storage::{ImageBlob, ImageSource},
    },
    services::places::PlaceService,
    utils::string_utils::clean_optional_string,
};

/// 업로드 이미지 최대 크기 (5 MiB)
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
/// 텍스트 필드 최대 크기
const MAX_TEXT_BYTES: usize = 16 * 1024;
const ALLOWED_IMAGE_TYPES: [&str; 5] = ["image/png", "image/jpeg", "image/jpg", "image/gif", "image/webp"];

/// multipart 본문에서 모은 장소 생성 입력
#[derive(Debug, Default)]
struct PlaceForm {
    request: CreatePlaceRequest,
    image: Option<ImageSource>,
}

impl PlaceForm {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "title" => self.request.title = value,
            "description" => self.request.description = value,
            "address" => self.request.address = value,
            "creator" => self.request.creator = clean_optional_string(Some(value)),
            "image" => {
                if let Some(url) = clean_optional_string(Some(value)) {
                    self.image = Some(ImageSource::Uploaded(url));
                }
            }
            other => log::debug!("알 수 없는 multipart 필드 무시: {}", other),
        }
    }

    fn into_parts(self) -> Result<(CreatePlaceRequest, ImageSource), AppError> {
        let image = self.image
            .ok_or_else(|| AppError::ValidationError("이미지를 첨부해주세요".to_string()))?;

        Ok((self.request, image))
    }
}

fn multipart_error(e: impl std::fmt::Display) -> AppError {
    AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e))
}

async fn read_field(field: &mut Field, limit: usize) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
        if bytes.len() + chunk.len() > limit {
            return Err(AppError::ValidationError(format!(
                "필드 크기가 제한({} bytes)을 초과했습니다", limit
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

async fn read_place_form(mut payload: Multipart) -> Result<PlaceForm, AppError> {
    let mut form = PlaceForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|disposition| disposition.get_filename())
            .map(str::to_string);

        match file_name {
            Some(file_name) if name == "image" => {
                let content_type = field
                    .content_type()
                    .map(|mime| mime.essence_str().to_string())
                    .unwrap_or_default();

                if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
                    return Err(AppError::ValidationError(format!(
                        "지원하지 않는 이미지 형식입니다: {}", content_type
                    )));
                }

                let bytes = read_field(&mut field, MAX_IMAGE_BYTES).await?;
                if bytes.is_empty() {
                    return Err(AppError::ValidationError("이미지 파일이 비어 있습니다".to_string()));
                }

                form.image = Some(ImageSource::Blob(ImageBlob {
                    bytes,
                    content_type,
                    file_name: Some(file_name),
                }));
            }
            _ => {
                let bytes = read_field(&mut field, MAX_TEXT_BYTES).await?;
                let value = String::from_utf8(bytes)
                    .map_err(|_| AppError::ValidationError(format!("{} 필드가 UTF-8이 아닙니다", name)))?;
                form.set_text(&name, value);
            }
        }
    }

    Ok(form)
}

#[get("/user/{uid}")]
pub async fn get_places_by_user(
    uid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let place_service = ServiceLocator::get::<PlaceService>();
    let places = place_service.places_by_user(&uid).await?;

    Ok(HttpResponse::Ok().json(PlacesResponse::from(places)))
}

#[get("/{pid}")]
pub async fn get_place(
    pid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let place_service = ServiceLocator::get::<PlaceService>();
    let place = place_service.get_place(&pid).await?;

    Ok(HttpResponse::Ok().json(PlaceEnvelope::from(place)))
}

fn json_body(ctx: &GuardContext) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("application/json"))
}

/// Pre-signed URL로 이미지를 올린 클라이언트의 JSON 생성 요청
#[post("", guard = "json_body")]
pub async fn create_place_from_json(
    user: AuthenticatedUser,
    payload: web::Json<CreatePlaceWithImageUrl>,
) -> Result<HttpResponse, AppError> {
    let requester = user.object_id()?;
    let CreatePlaceWithImageUrl { place: request, image } = payload.into_inner();

    let place_service = ServiceLocator::get::<PlaceService>();
    let place = place_service
        .create_place(request, &requester, ImageSource::Uploaded(image))
        .await?;

    Ok(HttpResponse::Created().json(PlaceEnvelope::from(place)))
}

#[post("")]
pub async fn create_place(
    user: AuthenticatedUser,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let requester = user.object_id()?;
    let (request, image) = read_place_form(payload).await?.into_parts()?;

    let place_service = ServiceLocator::get::<PlaceService>();
    let place = place_service.create_place(request, &requester, image).await?;

    Ok(HttpResponse::Created().json(PlaceEnvelope::from(place)))
}

#[patch("/{pid}")]
pub async fn update_place(
    user: AuthenticatedUser,
    pid: web::Path<String>,
    payload: web::Json<UpdatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;
    let requester = user.object_id()?;

    let place_service = ServiceLocator::get::<PlaceService>();
    let place = place_service.update_place(&pid, &requester, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PlaceEnvelope::from(place)))
}

#[delete("/{pid}")]
pub async fn delete_place(
    user: AuthenticatedUser,
    pid: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let requester = user.object_id()?;

    let place_service = ServiceLocator::get::<PlaceService>();
    place_service.delete_place(&pid, &requester).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Deleted place.")))
}
