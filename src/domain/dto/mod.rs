//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문 구조를 정의합니다. 요청 DTO는 `validator`로 검증되며
//! 검증 실패는 `AppError::ValidationError`(422)로 변환됩니다.
//!
//! - [`users`] - 회원가입, 로그인, 사용자 목록
//! - [`places`] - 장소 생성/수정/조회

pub mod users;
pub mod places;
