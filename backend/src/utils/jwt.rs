//! JWT token utilities for authentication and authorization.
//!
//! Provides token creation, validation, and claims management for gamer
//! authentication.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::{ServiceError, ServiceResult};

/// JWT Claims structure identifying the user and their gamer profile
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Gamer ID
    pub gamer_id: i64,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance with keys from configuration
    pub fn new(config: &Config) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtUtils {
            encoding_key,
            decoding_key,
            validation,
            expires_in_seconds: config.jwt_expires_in_seconds,
        }
    }

    /// Generate a new JWT token for a user and their gamer profile
    pub fn generate_token(&self, user_id: i64, gamer_id: i64) -> ServiceResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.expires_in_seconds as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            gamer_id,
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::internal_error(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a JWT token
    pub fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::unauthorized(format!("Token validation failed: {}", e)))
    }
}

impl Claims {
    /// User ID carried in the `sub` claim
    pub fn user_id(&self) -> ServiceResult<i64> {
        self.sub
            .parse()
            .map_err(|_| ServiceError::unauthorized("Malformed token subject"))
    }
}
