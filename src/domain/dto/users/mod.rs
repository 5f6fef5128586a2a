//! # User Data Transfer Objects
//!
//! ```text
//! users/
//! ├── request/    # SignupRequest, LoginRequest
//! └── response/   # UserResponse, UsersResponse, AuthResponse
//! ```

pub mod request;
pub mod response;
