use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 정보 응답 (비밀번호 해시 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image: String,
    pub places: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            image,
            places,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            image,
            places: places.iter().map(|place_id| place_id.to_hex()).collect(),
        }
    }
}

/// `GET /api/users` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
}

/// 회원가입/로그인 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl AuthResponse {
    pub fn new(user_id: String, email: String, token: String, expires_in: i64) -> Self {
        Self {
            user_id,
            email,
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
