//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 요청 본문 검증과
//! 응답 변환만 담당하고, 비즈니스 로직은 서비스 계층에 위임합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직, 트랜잭션 조정         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`places`**: 장소 조회/생성/수정/삭제 (`/api/places`)
//! - **`users`**: 사용자 목록, 회원가입, 로그인 (`/api/users`)
//! - **`uploads`**: 이미지 Pre-signed URL 발급 (`/api/uploads`)
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! `{"error": "..."}` 본문과 함께 에러 종류에 맞는 상태 코드로 변환됩니다.

pub mod places;
pub mod users;
pub mod uploads;
