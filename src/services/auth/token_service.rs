//! JWT 토큰 관리 서비스 구현
//!
//! 로그인/회원가입 시 발급하는 HS256 액세스 토큰의 생성과 검증을 담당합니다.
//! 리프레시 토큰은 발급하지 않으며, 만료되면 다시 로그인해야 합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use singleton_macro::service;
use crate::{
    config::JwtConfig,
    core::errors::{AppError, ErrorContext},
    domain::entities::users::user::User,
    domain::token::token::TokenClaims,
};

#[service(name="token")]
pub struct TokenService {
    // 외부 의존성 없음
}

fn sign(claims: &TokenClaims, secret: &str) -> Result<String, AppError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
        .context("JWT 토큰 생성 실패")
}

fn verify(token: &str, secret: &str) -> Result<TokenClaims, AppError> {
    decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map(|token_data| token_data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
            },
            _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
        })
}

impl TokenService {
    /// 사용자용 액세스 토큰 발급 (`sub` = 사용자 ID)
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        sign(&claims, &JwtConfig::secret())
    }

    /// 토큰 유효 시간 (초)
    pub fn expires_in(&self) -> i64 {
        JwtConfig::expiration_hours() * 3600
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        verify(token, &JwtConfig::secret())
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(exp_offset: i64) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: "665f1c2e8b3e4a0012345678".to_string(),
            email: "max@example.com".to_string(),
            iat: now,
            exp: now + exp_offset,
        }
    }

    #[test]
    fn test_signed_token_verifies_with_same_secret() {
        let token = sign(&claims(3600), "secret").unwrap();
        let decoded = verify(&token, "secret").unwrap();

        assert_eq!(decoded.sub, "665f1c2e8b3e4a0012345678");
        assert_eq!(decoded.email, "max@example.com");
    }

    #[test]
    fn test_wrong_secret_is_authentication_error() {
        let token = sign(&claims(3600), "secret").unwrap();

        assert!(matches!(verify(&token, "other"), Err(AppError::AuthenticationError(_))));
        assert!(matches!(verify("not-a-jwt", "secret"), Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = sign(&claims(-3600), "secret").unwrap();

        match verify(&token, "secret") {
            Err(AppError::AuthenticationError(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected expired token error, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService::instance();

        assert_eq!(service.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(service.extract_bearer_token("Basic abc").is_err());
        assert!(service.extract_bearer_token("Bearer   ").is_err());
    }
}
