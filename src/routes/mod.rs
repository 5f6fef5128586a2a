//! API 라우트 설정 모듈
//!
//! 기능별 스코프와 인증 레벨을 한 곳에서 구성합니다.
//!
//! | 스코프 | 인증 미들웨어 | 비고 |
//! |--------|---------------|------|
//! | `/api/places` | `optional` | 변경 핸들러는 `AuthenticatedUser` 추출자로 401 |
//! | `/api/users` | - | 목록, 회원가입, 로그인 |
//! | `/api/uploads` | `required` | Pre-signed URL 발급 |
//! | `/health` | - | 헬스체크 |
//!
//! ```rust,ignore
//! App::new().configure(configure_all_routes)
//! ```

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // JSON 본문 파싱 실패도 422로 응답
    cfg.app_data(json_config());

    configure_place_routes(cfg);
    configure_user_routes(cfg);
    configure_upload_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/places")
            .wrap(AuthMiddleware::optional())
            .service(handlers::places::get_places_by_user)
            .service(handlers::places::get_place)
            .service(handlers::places::create_place_from_json)
            .service(handlers::places::create_place)
            .service(handlers::places::update_place)
            .service(handlers::places::delete_place)
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::signup)
            .service(handlers::users::login)
    );
}

fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/uploads")
            .wrap(AuthMiddleware::required())
            .service(handlers::uploads::presign_upload)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "places_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "storage": "S3",
            "geocoding": "Google Geocoding API",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
