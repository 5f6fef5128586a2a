//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 `#[repository]` 매크로로
//! 싱글톤 관리됩니다. 사용자의 `places` 목록은 여기서 변경하지 않습니다.

pub mod user_repo;

pub use user_repo::{UserRepository, USERS_COLLECTION};
