//! # 사용자 응답 DTO
//!
//! 사용자 엔티티를 클라이언트에 노출할 형태로 변환합니다.
//! 비밀번호 해시처럼 민감한 필드는 응답 DTO에 포함되지 않습니다.

pub mod user_response;

pub use user_response::{AuthResponse, UserResponse, UsersResponse};
