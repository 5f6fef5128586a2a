//! 인증 서비스 모듈
//!
//! HS256 JWT 액세스 토큰 발급과 검증을 담당하는 [`TokenService`]를 제공합니다.
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let token = token_service.generate_access_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
