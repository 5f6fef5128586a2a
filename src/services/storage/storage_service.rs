//! S3 호환 오브젝트 스토리지 클라이언트
//!
//! 모든 요청은 [`S3Presigner`]로 서명한 URL을 통해 전송됩니다.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use singleton_macro::service;
use uuid::Uuid;
use crate::{
    config::S3Config,
    core::errors::AppError,
    domain::storage::{ImageBlob, PresignedUpload},
    services::storage::sigv4::S3Presigner,
};

/// 이미지 오브젝트 저장소
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// 클라이언트가 직접 PUT 할 수 있는 Pre-signed URL을 발급합니다.
    async fn presign_upload(&self) -> Result<PresignedUpload, AppError>;

    /// 이미지를 업로드하고 오브젝트 URL을 반환합니다.
    async fn store(&self, blob: ImageBlob) -> Result<String, AppError>;

    /// 오브젝트를 삭제합니다. 관리 대상 URL이 아니면 아무것도 하지 않습니다.
    async fn release(&self, image_url: &str) -> Result<(), AppError>;

    /// 이 버킷의 업로드 접두사 아래 오브젝트 URL인지 확인합니다.
    fn is_managed_url(&self, image_url: &str) -> bool;
}

/// 업로드 접두사 아래에 있는 이 버킷의 오브젝트 키를 돌려줍니다.
///
/// 접두사 밖의 키, 빈 이름, `.`/`..` 세그먼트를 포함한 키는 `None`입니다.
fn managed_key(presigner: &S3Presigner, image_url: &str, prefix: &str) -> Option<String> {
    let key = presigner.key_for_url(image_url)?;
    let name = if prefix.is_empty() {
        key.as_str()
    } else {
        key.strip_prefix(prefix)?.strip_prefix('/')?
    };

    let valid = !name.is_empty()
        && name.split('/').all(|segment| !matches!(segment, "" | "." | ".."));

    valid.then_some(key)
}

#[service(name = "storage")]
pub struct StorageService {
    // 외부 의존성 없음
}

impl StorageService {
    fn presigner(&self) -> Result<S3Presigner, AppError> {
        Ok(S3Presigner::new(S3Config::settings()?))
    }

    fn new_key(extension: Option<&str>) -> String {
        let name = match extension {
            Some(extension) => format!("{}.{}", Uuid::new_v4(), extension),
            None => Uuid::new_v4().to_string(),
        };

        match S3Config::key_prefix().as_str() {
            "" => name,
            prefix => format!("{}/{}", prefix, name),
        }
    }
}

#[async_trait]
impl BlobStore for StorageService {
    async fn presign_upload(&self) -> Result<PresignedUpload, AppError> {
        let presigner = self.presigner()?;
        let key = Self::new_key(None);
        let expires_in = S3Config::upload_expiry_secs();

        Ok(PresignedUpload {
            url: presigner.presign("PUT", &key, expires_in, Utc::now())?,
            object_url: presigner.object_url(&key),
            key,
            expires_in,
        })
    }

    async fn store(&self, blob: ImageBlob) -> Result<String, AppError> {
        let presigner = self.presigner()?;
        let key = Self::new_key(Some(blob.extension()));
        let url = presigner.presign("PUT", &key, S3Config::upload_expiry_secs(), Utc::now())?;
        let size = blob.bytes.len();

        let response = reqwest::Client::new()
            .put(url)
            .header(reqwest::header::CONTENT_TYPE, blob.content_type)
            .body(blob.bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이미지 업로드 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "이미지 업로드 실패 ({}): {}", status, error_text
            )));
        }

        info!("이미지 업로드 완료: {} ({} bytes)", key, size);
        Ok(presigner.object_url(&key))
    }

    async fn release(&self, image_url: &str) -> Result<(), AppError> {
        let presigner = self.presigner()?;
        let Some(key) = managed_key(&presigner, image_url, &S3Config::key_prefix()) else {
            debug!("관리 대상이 아닌 이미지 URL은 삭제하지 않습니다: {}", image_url);
            return Ok(());
        };

        let url = presigner.presign("DELETE", &key, 60, Utc::now())?;
        let response = reqwest::Client::new()
            .delete(url)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이미지 삭제 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "이미지 삭제 실패 ({}): {}", response.status(), key
            )));
        }

        debug!("이미지 삭제 완료: {}", key);
        Ok(())
    }
    fn is_managed_url(&self, image_url: &str) -> bool {
        self.presigner()
            .is_ok_and(|presigner| managed_key(&presigner, image_url, &S3Config::key_prefix()).is_some())
    }
}
