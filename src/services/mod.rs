//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들과,
//! 트레이트 객체를 조합해 만드는 장소 서비스를 제공합니다.
//!
//! # Features
//!
//! - 회원가입, 로그인, 사용자 목록
//! - JWT 액세스 토큰 발급/검증
//! - 주소 지오코딩 (Google Geocoding API)
//! - S3 이미지 업로드와 Pre-signed URL
//! - 장소 생성/수정/삭제 트랜잭션 조정
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, places::PlaceService};
//!
//! let user_service = UserService::instance();
//! let place_service = ServiceLocator::get::<PlaceService>();
//! ```

pub mod users;
pub mod auth;
pub mod geo;
pub mod storage;
pub mod places;
