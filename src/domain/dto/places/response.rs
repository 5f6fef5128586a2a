//! 장소 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::places::place::{Location, Place};

/// 장소 정보 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub location: Location,
    pub image: String,
    pub creator: String,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        Self {
            id: place.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: place.title,
            description: place.description,
            address: place.address,
            location: place.location,
            image: place.image,
            creator: place.creator.to_hex(),
        }
    }
}

/// 단일 장소 응답 `{ "place": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceEnvelope {
    pub place: PlaceResponse,
}

impl From<Place> for PlaceEnvelope {
    fn from(place: Place) -> Self {
        Self { place: PlaceResponse::from(place) }
    }
}

/// 장소 목록 응답 `{ "places": [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<PlaceResponse>,
}

impl From<Vec<Place>> for PlacesResponse {
    fn from(places: Vec<Place>) -> Self {
        Self {
            places: places.into_iter().map(PlaceResponse::from).collect(),
        }
    }
}

/// 단순 메시지 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
