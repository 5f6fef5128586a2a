//! # Domain Layer
//!
//! - [`entities`] - MongoDB에 저장되는 `User`, `Place`
//! - [`dto`] - HTTP 요청/응답 본문
//! - [`models`] - 인증, 토큰, 이미지 업로드 모델

pub mod entities;
pub mod dto;
pub mod models;

pub use models::{auth, storage, token};
