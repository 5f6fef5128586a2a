//! 장소 요청 DTO
//!
//! `POST /api/places`가 multipart 본문이면 핸들러가 텍스트 필드를 모아
//! [`CreatePlaceRequest`]를 구성하고, JSON 본문이면 미리 업로드한 이미지 URL과
//! 함께 [`CreatePlaceWithImageUrl`]로 역직렬화합니다. `PATCH /api/places/{pid}`는
//! JSON 본문을 [`UpdatePlaceRequest`]로 직접 역직렬화합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::validate_not_blank;

/// 장소 생성 요청의 텍스트 필드
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(custom(function = "validate_not_blank", message = "제목을 입력해주세요"))]
    pub title: String,

    #[validate(length(min = 5, message = "설명은 최소 5자 이상이어야 합니다"))]
    pub description: String,

    #[validate(custom(function = "validate_not_blank", message = "주소를 입력해주세요"))]
    pub address: String,

    /// 소유자 ID. 생략하면 인증된 사용자가 소유자가 됩니다.
    pub creator: Option<String>,
}

/// Pre-signed URL 업로드를 마친 클라이언트의 JSON 생성 요청
///
/// ```json
/// { "title": "...", "description": "...", "address": "...",
///   "image": "https://bucket.s3.amazonaws.com/images/<uuid>", "creator": "..." }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaceWithImageUrl {
    #[serde(flatten)]
    pub place: CreatePlaceRequest,
    pub image: String,
}

/// 장소 수정 요청 (제목/설명만 변경 가능)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(custom(function = "validate_not_blank", message = "제목을 입력해주세요"))]
    pub title: String,

    #[validate(length(min = 5, message = "설명은 최소 5자 이상이어야 합니다"))]
    pub description: String,
}
