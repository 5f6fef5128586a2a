//! 클라이언트 직접 업로드용 Pre-signed URL 발급

use actix_web::{get, HttpResponse};
use crate::{
    core::errors::AppError,
    domain::auth::authenticated_user::AuthenticatedUser,
    services::storage::{BlobStore, StorageService},
};

/// `GET /api/uploads/presign`
///
/// 응답의 `url`로 이미지를 PUT 한 뒤, `object_url`을 장소 생성 요청의
/// `image` 필드로 전달합니다.
#[get("/presign")]
pub async fn presign_upload(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let upload = StorageService::instance().presign_upload().await?;

    log::debug!("Pre-signed URL 발급 - 사용자: {}, 키: {}", user.user_id, upload.key);

    Ok(HttpResponse::Ok().json(upload))
}
