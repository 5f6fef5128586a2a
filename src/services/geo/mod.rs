//! 주소 → 좌표 변환 (지오코딩)
//!
//! 장소 서비스는 [`Geocoder`] 트레이트에만 의존하며, 운영 환경에서는
//! Google Geocoding API를 호출하는 [`GeocodingService`]가 주입됩니다.

pub mod geocoding_service;

pub use geocoding_service::{Geocoder, GeocodingService};

#[cfg(test)]
pub use geocoding_service::MockGeocoder;
