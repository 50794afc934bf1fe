//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between service-layer errors
//! and HTTP responses. Includes:
//! - Standard error response format
//! - ServiceError to HTTP status code mapping
//! - JSON body rejection formatting
//!
//! # Response Format
//! Successful resource calls return the serialized entity directly. All errors
//! return consistent JSON responses containing:
//! - `message`: Human-readable message
//! - `error.error_type`: Machine-readable error category
//! - `error.details`: Optional field-specific validation errors
//!
//! # Error Handling Flow
//! 1. Service layer returns domain-specific `ServiceError`
//! 2. `service_error_to_http` converts to appropriate HTTP response
//! 3. Validation errors carry their field details through unchanged

use crate::errors::{FieldError, ServiceError};
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Error half of every handler's return type.
pub type HttpError = (StatusCode, Json<ApiResponse<()>>);

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(
        message: impl Into<String>,
        error_type: impl Into<String>,
        details: Option<Vec<FieldError>>,
    ) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
                details,
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Builds an error response with the standard body.
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_type: &str,
    details: Option<Vec<FieldError>>,
) -> HttpError {
    (
        status,
        Json(ApiResponse::<()>::error(message, error_type, details)),
    )
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> HttpError {
    match error {
        ServiceError::Validation { message, fields } => {
            let details = if fields.is_empty() { None } else { Some(fields) };
            error_response(StatusCode::BAD_REQUEST, message, "validation_error", details)
        }
        ServiceError::NotFound { entity, identifier } => error_response(
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity, identifier),
            "not_found",
            None,
        ),
        ServiceError::AlreadyExists { entity, identifier } => error_response(
            StatusCode::CONFLICT,
            format!("{} '{}' already exists", entity, identifier),
            "already_exists",
            None,
        ),
        ServiceError::Unauthorized { message } => {
            error_response(StatusCode::UNAUTHORIZED, message, "unauthorized", None)
        }
        ServiceError::PermissionDenied { message } => {
            error_response(StatusCode::FORBIDDEN, message, "permission_denied", None)
        }
        ServiceError::Conflict { message } => {
            error_response(StatusCode::CONFLICT, message, "conflict", None)
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {:#}", source);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "database_error",
                None,
            )
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                "internal_error",
                None,
            )
        }
    }
}

/// Converts a rejected JSON body into a 400 validation response
pub fn json_rejection_to_http(rejection: JsonRejection) -> HttpError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    error_response(
        StatusCode::BAD_REQUEST,
        "Validation failed",
        "validation_error",
        Some(vec![FieldError::new("body", rejection.body_text())]),
    )
}

/// Parses a path id. A segment that cannot name a row is reported as not found.
pub fn parse_id(entity: &str, raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| service_error_to_http(ServiceError::not_found(entity, raw)))
}

/// Last value supplied for `key` in a query string, matching how repeated
/// filter parameters resolve.
pub fn last_query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
