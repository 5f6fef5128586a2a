//! 이미지 오브젝트 스토리지
//!
//! - [`sigv4`] - AWS Signature V4 Pre-signed URL 생성
//! - [`storage_service`] - [`BlobStore`] 트레이트와 S3 구현체

pub mod sigv4;
pub mod storage_service;

pub use storage_service::{BlobStore, StorageService};

#[cfg(test)]
pub use storage_service::MockBlobStore;
