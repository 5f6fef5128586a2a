//! 장소 데이터 액세스 계층
//!
//! 장소 쓰기는 항상 소유자의 `places` 목록과 함께 변경되어야 하므로,
//! 서비스는 구체 리포지토리 대신 [`PlaceStore`](place_store::PlaceStore)
//! 트레이트에 의존합니다.

pub mod place_store;
pub mod place_repo;

#[cfg(test)]
pub(crate) mod memory;

pub use place_store::{PlaceStore, PlaceWithOwner};
pub use place_repo::PlaceRepository;
