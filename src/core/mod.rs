//! # Core Framework Module
//!
//! 백엔드 전역에서 사용하는 기반 기능을 제공합니다.
//!
//! - [`registry`] - `#[service]` / `#[repository]` 싱글톤을 연결하는 `ServiceLocator`
//! - [`errors`] - HTTP 응답으로 자동 변환되는 `AppError`
//!
//! ```rust,ignore
//! use crate::core::{AppError, ServiceLocator};
//!
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
