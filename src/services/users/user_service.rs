//! # 사용자 관리 서비스 구현
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     UserService                      │
//! │  signup  ─ 중복 확인 → bcrypt 해싱 → 저장 → 토큰 발급  │
//! │  login   ─ 이메일 조회 → bcrypt 검증 → 토큰 발급       │
//! │  users   ─ 전체 목록 (비밀번호 해시 제외)              │
//! └──────────────────────────────────────────────────────┘
//!              │                          │
//!              ▼                          ▼
//!       UserRepository               TokenService
//! ```
//!
//! 사용자의 `places` 목록은 가입 시 비어 있으며, 이후에는 장소 서비스의
//! 트랜잭션 쓰기 경로에서만 변경됩니다.

use std::sync::Arc;
use log::{debug, info};
use singleton_macro::service;
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        entities::users::user::User,
        dto::users::{
            request::{LoginRequest, SignupRequest},
            response::{AuthResponse, UserResponse, UsersResponse},
        },
    },
    repositories::users::user_repo::UserRepository,
    services::auth::TokenService,
};

const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

fn hash_password(password: &str, cost: u32) -> AppResult<String> {
    bcrypt::hash(password, cost).context("비밀번호 해싱 실패")
}

/// 비밀번호가 일치하지 않으면 로그인 실패와 같은 인증 에러를 반환합니다.
fn check_password(password: &str, password_hash: &str) -> AppResult<()> {
    let is_valid = bcrypt::verify(password, password_hash).context("비밀번호 검증 실패")?;

    if is_valid {
        Ok(())
    } else {
        Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))
    }
}

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    token_service: Arc<TokenService>,
}

impl UserService {
    /// 회원가입 후 바로 사용할 수 있는 토큰을 발급합니다.
    ///
    /// 이미 가입된 이메일이면 `ConflictError`(409)를 반환합니다.
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash_password(&request.password, PasswordConfig::bcrypt_cost())?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.name.trim().to_string(),
            request.email,
            password_hash,
            request.image.unwrap_or_default(),
        );

        let created = self.user_repo.create(user).await?;
        info!("새 사용자 가입: {}", created.email);

        self.issue_token(&created)
    }

    /// 이메일이 없거나 비밀번호가 틀린 경우 모두 같은 401 메시지를 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let user = self.user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        check_password(&request.password, &user.password_hash)?;

        self.issue_token(&user)
    }

    pub async fn list_users(&self) -> Result<UsersResponse, AppError> {
        let users = self.user_repo.find_all().await?;

        Ok(UsersResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
        })
    }

    fn issue_token(&self, user: &User) -> Result<AuthResponse, AppError> {
        let user_id = user.id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let token = self.token_service.generate_access_token(user)?;

        Ok(AuthResponse::new(user_id, user.email.clone(), token, self.token_service.expires_in()))
    }
}
