//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 영속 엔티티들입니다.
//!
//! - [`users::user::User`] - `users` 컬렉션
//! - [`places::place::Place`] - `places` 컬렉션
//!
//! 두 엔티티는 `User.places` ↔ `Place.creator`로 양방향 연결되어 있으며,
//! 이 연결은 데이터베이스가 아니라 `PlaceStore` 작업 단위가 유지합니다.

pub mod users;
pub mod places;
