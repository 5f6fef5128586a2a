//! # Place Data Transfer Objects

pub mod request;
pub mod response;

pub use request::{CreatePlaceRequest, CreatePlaceWithImageUrl, UpdatePlaceRequest};
pub use response::{MessageResponse, PlaceEnvelope, PlaceResponse, PlacesResponse};
