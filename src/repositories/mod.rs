//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! `#[repository]` 매크로를 사용하여 싱글톤으로 관리되는 MongoDB 리포지토리들을 제공합니다.
//!
//! - [`users`] - 회원가입/로그인/목록 조회
//! - [`places`] - 장소와 소유자 목록을 함께 변경하는 트랜잭션 쓰기 경로
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::instance();
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
pub mod places;
