//! 장소 서비스 모듈
//!
//! [`PlaceService`]는 장소 생성/삭제 시 장소 문서와 소유자의 장소 목록을
//! 하나의 트랜잭션으로 변경하는 쓰기 경로 조정자입니다.

pub mod place_service;

pub use place_service::PlaceService;
