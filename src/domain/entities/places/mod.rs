//! Places Entity Module
//!
//! [`Place`](place::Place) 엔티티와 좌표 타입 [`Location`](place::Location)을 정의합니다.

pub mod place;
