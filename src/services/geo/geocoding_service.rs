//! Google Geocoding API 클라이언트
//!
//! ```text
//! GET {GEOCODING_ENDPOINT}?address=<주소>&key=<GOOGLE_API_KEY>
//! ```
//!
//! | 응답 | 결과 |
//! |------|------|
//! | `status: "OK"` | `results[0].geometry.location` |
//! | `status: "ZERO_RESULTS"` 또는 빈 `results` | `ValidationError` (422) |
//! | 그 외 status, 전송 실패, 2xx 이외 | `ExternalServiceError` (500) |
//!
//! 실패한 요청은 재시도하지 않습니다.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use singleton_macro::service;
use crate::{
    config::GeocodingConfig,
    core::errors::AppError,
    domain::entities::places::place::Location,
};

pub const LOCATION_NOT_FOUND: &str = "Could not find location for the specified address.";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Location, AppError>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

/// Geocoding API 응답 본문에서 첫 번째 결과의 좌표를 꺼냅니다.
pub fn parse_geocode_response(body: &str) -> Result<Location, AppError> {
    let response: GeocodeResponse = serde_json::from_str(body)
        .map_err(|e| AppError::ExternalServiceError(format!("지오코딩 응답 파싱 실패: {}", e)))?;

    match response.status.as_str() {
        "OK" => response.results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| AppError::ValidationError(LOCATION_NOT_FOUND.to_string())),
        "ZERO_RESULTS" => Err(AppError::ValidationError(LOCATION_NOT_FOUND.to_string())),
        status => Err(AppError::ExternalServiceError(format!(
            "지오코딩 실패 ({}): {}",
            status,
            response.error_message.unwrap_or_default()
        ))),
    }
}

#[service(name = "geocoding")]
pub struct GeocodingService {
    // 외부 의존성 없음
}

#[async_trait]
impl Geocoder for GeocodingService {
    async fn geocode(&self, address: &str) -> Result<Location, AppError> {
        let api_key = GeocodingConfig::api_key()?;
        let client = reqwest::Client::new();

        let response = client
            .get(GeocodingConfig::endpoint())
            .query(&[("address", address), ("key", api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("지오코딩 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "지오코딩 API 오류 ({}): {}", status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("지오코딩 응답 읽기 실패: {}", e)))?;

        let location = parse_geocode_response(&body)?;
        debug!("지오코딩 완료: {} -> ({}, {})", address, location.lat, location.lng);

        Ok(location)
    }
}
