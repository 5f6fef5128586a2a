//! 이미지 오브젝트 관련 모델

use serde::{Deserialize, Serialize};

/// multipart로 전달된 이미지 바이트
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl ImageBlob {
    /// 오브젝트 키에 붙일 확장자 (`image/png` -> `png`)
    pub fn extension(&self) -> &'static str {
        match self.content_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "bin",
        }
    }
}

/// 장소 생성 시 전달되는 이미지
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// 클라이언트가 Pre-signed URL로 이미 업로드한 오브젝트 URL
    Uploaded(String),
    /// 서버가 대신 업로드해야 하는 이미지 바이트
    Blob(ImageBlob),
}

/// 클라이언트 직접 업로드용 Pre-signed URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignedUpload {
    /// 서명된 PUT URL
    pub url: String,
    /// 업로드 완료 후 장소 생성 시 전달할 오브젝트 URL (쿼리 제외)
    pub object_url: String,
    pub key: String,
    pub expires_in: u64,
}
