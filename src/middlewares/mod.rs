//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 JWT 검증
//! - 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! ```rust,ignore
//! App::new()
//!     .service(
//!         web::scope("/api/places")
//!             .wrap(AuthMiddleware::optional()) // 변경 핸들러는 AuthenticatedUser 추출자로 401 처리
//!             .service(handlers::places::create_place)
//!     )
//!     .service(
//!         web::scope("/api/uploads")
//!             .wrap(AuthMiddleware::required())
//!             .service(handlers::uploads::presign_upload)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
