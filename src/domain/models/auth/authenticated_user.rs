use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// JWT 토큰에서 추출된 사용자 정보
///
/// `AuthMiddleware`가 검증에 성공하면 Request Extensions에 저장합니다.
/// 핸들러 인자로 선언하면 인증이 필수가 되며, 없으면 401을 반환합니다.
///
/// ```rust,ignore
/// #[delete("/{pid}")]
/// async fn delete_place(user: AuthenticatedUser, pid: web::Path<String>) -> Result<HttpResponse, AppError> {
///     // user.user_id 사용
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 ID (ObjectId 16진수 문자열)
    pub user_id: String,

    pub email: String,
}

impl AuthenticatedUser {
    pub fn object_id(&self) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(&self.user_id)
            .map_err(|_| AppError::AuthenticationError("토큰의 사용자 ID가 올바르지 않습니다".to_string()))
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "인증되지 않은 요청입니다".to_string()
            ).into())),
        }
    }
}
