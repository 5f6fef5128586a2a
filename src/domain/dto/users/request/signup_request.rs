//! 회원가입 / 로그인 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{deserialize_optional_string, validate_not_blank};

/// 회원가입 요청
///
/// ```json
/// { "name": "Max", "email": "max@example.com", "password": "secret1", "image": "https://..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_not_blank", message = "이름을 입력해주세요"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,

    /// 프로필 이미지 URL (Pre-signed URL로 업로드한 오브젝트)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
}

/// 로그인 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_valid_signup_request() {
        assert!(signup("Max", "max@example.com", "secret1").validate().is_ok());
    }

    #[test]
    fn test_signup_rejects_blank_name_bad_email_and_short_password() {
        let errors = signup("   ", "not-an-email", "12345").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_signup_blank_image_becomes_none() {
        let json = r#"{"name":"Max","email":"max@example.com","password":"secret1","image":"  "}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.image, None);

        let json = r#"{"name":"Max","email":"max@example.com","password":"secret1"}"#;
        let request: SignupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.image, None);
    }

    #[test]
    fn test_login_requires_password() {
        let request = LoginRequest {
            email: "max@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
