//! 사용자 요청 DTO

pub mod signup_request;

pub use signup_request::{LoginRequest, SignupRequest};
