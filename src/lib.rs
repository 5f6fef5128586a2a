//! 장소 공유 서비스 백엔드
//!
//! 사용자가 장소(제목, 설명, 주소, 이미지)를 등록하고 공유하는 REST API입니다.
//! 주소는 Google Geocoding API로 좌표로 변환되고, 이미지는 S3 호환
//! 오브젝트 스토리지에 저장됩니다.
//!
//! # Features
//!
//! - **사용자 관리**: 회원가입, 로그인, 사용자 목록
//! - **JWT 인증**: HS256 액세스 토큰 기반 상태 없는 인증
//! - **장소 관리**: 조회, 생성, 수정, 삭제 (소유자만 변경 가능)
//! - **트랜잭션 쓰기 경로**: 장소 문서와 소유자의 장소 목록을 함께 변경
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, multipart 파싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────────┐
//! │    Services     │ ──▶ │ Geocoding API / S3   │
//! └─────────────────┘     └──────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스, 트랜잭션
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 레플리카 셋 (트랜잭션 필요)
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
