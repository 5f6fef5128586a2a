//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 사용자 목록 | 200 OK |
//! | `POST` | `/api/users/signup` | 회원가입 + 토큰 발급 | 201 Created |
//! | `POST` | `/api/users/login` | 로그인 + 토큰 발급 | 200 OK |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::errors::AppError,
    domain::dto::users::request::{LoginRequest, SignupRequest},
    services::users::UserService,
};

#[get("")]
pub async fn list_users() -> Result<HttpResponse, AppError> {
    let user_service = UserService::instance();
    let users = user_service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user_service = UserService::instance();
    let response = user_service.signup(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    log::debug!("로그인 시도");

    let user_service = UserService::instance();
    let response = user_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
