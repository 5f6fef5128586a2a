//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 사용자 목록 조회를 담당하는 [`UserService`]를 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 로그인 실패 사유를 구분하지 않는 동일한 에러 메시지
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance();
//! let auth = user_service.signup(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
