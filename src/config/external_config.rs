//! 외부 서비스 설정
//!
//! 지오코딩 API와 S3 호환 오브젝트 스토리지 접속 정보를 읽어옵니다.
//! 필수 값이 없으면 시작 시 패닉하는 대신 호출 시점에 `InternalError`를 반환하여,
//! 해당 기능을 쓰지 않는 엔드포인트는 정상 동작하도록 합니다.

use std::env;
use crate::core::errors::AppError;

fn required(key: &str) -> Result<String, AppError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", key)))
}

/// Google Geocoding API 설정
pub struct GeocodingConfig;

impl GeocodingConfig {
    pub fn api_key() -> Result<String, AppError> {
        required("GOOGLE_API_KEY")
    }

    pub fn endpoint() -> String {
        env::var("GEOCODING_ENDPOINT")
            .unwrap_or_else(|_| "https://maps.googleapis.com/maps/api/geocode/json".to_string())
    }
}

/// S3 접속 정보
#[derive(Debug, Clone)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// S3 호환 스토리지 엔드포인트 (없으면 AWS 가상 호스트 방식)
    pub endpoint: Option<String>,
}

/// S3 오브젝트 스토리지 설정
pub struct S3Config;

impl S3Config {
    pub fn settings() -> Result<S3Settings, AppError> {
        Ok(S3Settings {
            bucket: required("S3_BUCKET")?,
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            access_key_id: required("S3_ACCESS_KEY_ID")?,
            secret_access_key: required("S3_SECRET_ACCESS_KEY")?,
            endpoint: env::var("S3_ENDPOINT")
                .ok()
                .map(|endpoint| endpoint.trim_end_matches('/').to_string())
                .filter(|endpoint| !endpoint.is_empty()),
        })
    }

    /// 업로드용 Pre-signed URL 유효 시간 (초, 기본값 300, 최대 7일)
    pub fn upload_expiry_secs() -> u64 {
        env::var("S3_UPLOAD_EXPIRY_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .filter(|secs| (1..=604_800).contains(secs))
            .unwrap_or(300)
    }

    /// 업로드 오브젝트 키 접두사 (기본값 `images`)
    pub fn key_prefix() -> String {
        env::var("S3_KEY_PREFIX")
            .map(|prefix| prefix.trim_matches('/').to_string())
            .unwrap_or_else(|_| "images".to_string())
    }
}
