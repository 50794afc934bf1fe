//! Data structures for authentication-related requests and responses.
//!
//! This module defines the registration and login payloads and the token
//! responses returned to clients.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload: login account plus gamer profile
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be between 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(
        email(message = "Must be a valid email"),
        length(max = 255, message = "Email too long")
    )]
    pub email: String,

    #[validate(length(max = 150, message = "First name too long"))]
    pub first_name: String,

    #[validate(length(max = 150, message = "Last name too long"))]
    pub last_name: String,

    #[validate(length(max = 50, message = "Address too long"))]
    pub address: String,

    #[validate(length(max = 15, message = "Phone number too long"))]
    pub phone_number: String,

    #[validate(length(max = 50, message = "Bio too long"))]
    pub bio: String,
}

/// Registration response carrying the new access token
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
}

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response containing the access token
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub valid: bool,
    pub token: String,
    pub expires_in: u64, // Token expiration in seconds
}
