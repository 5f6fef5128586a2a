//! JWT 액세스 토큰 클레임

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 ID
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
