//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 필드 정리, 공백 검증, ObjectId 파싱

pub mod string_utils;
