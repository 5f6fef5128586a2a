//! Users Entity Module
//!
//! 장소를 소유하는 [`User`](user::User) 엔티티를 정의합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(name, email, password_hash, image_url);
//! ```

pub mod user;
