//! # 문자열 유틸리티
//!
//! 요청 필드 정리와 검증에 쓰이는 공통 함수들입니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use validator::ValidationError;
use crate::core::errors::AppError;

/// `validator` 커스텀 검증: 공백만 있는 문자열을 거부합니다.
///
/// `length(min = 1)`은 `"   "`을 통과시키므로 필수 텍스트 필드에는 이 함수를 사용합니다.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`으로 만듭니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// serde `deserialize_with`용: 빈 문자열과 `null`을 `None`으로 역직렬화합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 경로/본문으로 받은 ID 문자열을 `ObjectId`로 변환합니다.
///
/// 형식이 잘못된 ID는 존재하지 않는 리소스가 아니라 잘못된 입력이므로
/// `ValidationError`(422)를 반환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 {} 형식입니다: {}", field_name, value)))
}
