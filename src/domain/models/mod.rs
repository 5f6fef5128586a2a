//! # Domain Models
//!
//! 영속되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 인증된 사용자, 미들웨어 모드
//! - [`token`] - JWT 클레임
//! - [`storage`] - 이미지 업로드 입력과 Pre-signed URL

pub mod auth;
pub mod token;
pub mod storage;
