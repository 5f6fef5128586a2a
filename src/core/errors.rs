//! # Application Error Handling
//!
//! 장소/사용자 백엔드 전체에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)은 `AppError`를 반환하고,
//! Actix-Web의 `ResponseError` 구현을 통해 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## 상태 코드 매핑
//!
//! | 변형 | HTTP 상태 |
//! |------|-----------|
//! | `ValidationError` | 422 Unprocessable Entity |
//! | `NotFound` | 404 Not Found |
//! | `ConflictError` | 409 Conflict |
//! | `AuthenticationError` | 401 Unauthorized |
//! | `AuthorizationError` | 403 Forbidden |
//! | 그 외 (`DatabaseError`, `TransactionError`, ...) | 500 Internal Server Error |
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "Not found: 장소를 찾을 수 없습니다" }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let place = store.find_place(&place_id).await?
//!     .ok_or_else(|| AppError::NotFound("장소를 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 입력 검증 실패, 리소스 없음, 인증/인가 실패, 그리고 인프라(데이터베이스,
/// 트랜잭션, 외부 서비스) 실패를 구분합니다. 인프라 실패는 모두 500으로
/// 응답되지만 로그와 테스트에서 원인을 구분할 수 있도록 변형을 나눠 둡니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 단건 연산 실패 (조회, 인덱스 생성 등)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 다중 문서 트랜잭션 실패
    ///
    /// 장소 생성/삭제처럼 `places`와 `users` 두 컬렉션을 함께 변경하는
    /// 트랜잭션이 중단되었을 때 사용합니다. 이 에러가 반환되면
    /// 두 컬렉션 모두 연산 이전 상태로 남아 있어야 합니다.
    #[error("Transaction error: {0}")]
    TransactionError(String),

    /// 입력값 검증 실패 (422)
    ///
    /// 필수 필드 누락, 잘못된 ObjectId 형식, 좌표를 찾을 수 없는 주소 등
    /// 클라이언트가 수정해서 다시 보내야 하는 요청에 사용합니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청한 리소스가 존재하지 않음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 생성 시도 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 (403) - 다른 사용자의 장소를 수정/삭제하려는 경우 등
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스(지오코딩, 오브젝트 스토리지) 호출 실패
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 예상하지 못한 내부 오류
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 변형에 대응하는 HTTP 상태 코드를 반환합니다.
    pub fn status(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.status()
    }

    /// 각 변형을 상태 코드와 `{"error": ...}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status().is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 애플리케이션 결과 타입
pub type AppResult<T> = Result<T, AppError>;

/// 임의의 에러에 문맥 메시지를 붙여 `InternalError`로 변환하는 확장 트레이트
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
