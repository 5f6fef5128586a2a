//! # Configuration Module
//!
//! 환경 변수 기반 설정을 타입별 접근자 구조체로 제공합니다.
//! 환경 변수는 `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env`
//! 파일로부터 `dotenv`로 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱, CORS 설정
//! - [`auth_config`] - JWT 토큰 설정
//! - [`external_config`] - 지오코딩 API, S3 오브젝트 스토리지 설정
//!
//! ## 환경 변수 요약
//!
//! ```bash
//! HOST=127.0.0.1
//! PORT=8080
//! ENVIRONMENT=development
//! FRONTEND_ORIGIN=http://localhost:3000
//!
//! BCRYPT_COST=10
//! JWT_SECRET=change-me
//! JWT_EXPIRATION_HOURS=1
//!
//! GOOGLE_API_KEY=...
//!
//! S3_BUCKET=places-images
//! S3_REGION=us-east-1
//! S3_ACCESS_KEY_ID=...
//! S3_SECRET_ACCESS_KEY=...
//! S3_ENDPOINT=http://localhost:9000   # 선택: MinIO 등 S3 호환 스토리지
//! ```

pub mod data_config;
pub mod auth_config;
pub mod external_config;

pub use data_config::*;
pub use auth_config::*;
pub use external_config::*;
