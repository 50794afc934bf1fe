//! Middleware for protecting authenticated routes.
//!
//! This module contains logic for validating bearer JWTs and attaching the
//! decoded claims to the request before it reaches a handler.

use crate::api::common::{HttpError, error_response};
use crate::config::Config;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

fn unauthorized(message: &str) -> HttpError {
    error_response(StatusCode::UNAUTHORIZED, message, "unauthorized", None)
}

/// JWT authentication middleware
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, HttpError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| unauthorized("Authentication credentials were not provided"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Expected a Bearer token"))?;

    let config = request.extensions().get::<Config>().ok_or_else(|| {
        tracing::error!("Config extension missing from request");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            "internal_error",
            None,
        )
    })?;

    let validated = JwtUtils::new(config).validate_token(token);

    match validated {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(e) => {
            tracing::debug!("Rejected token: {}", e);
            Err(unauthorized("Invalid token"))
        }
    }
}
