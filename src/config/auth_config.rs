//! 인증 관련 설정

use std::env;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// HS256 서명 비밀키
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "places-dev-secret".to_string()
            })
    }

    /// 액세스 토큰 유효 시간 (시간 단위, 기본값 1)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|hours| hours.parse().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(1)
    }
}
