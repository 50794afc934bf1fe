//! Global application error types and handlers.
//!
//! This module defines custom error types that are used across the entire
//! backend application and provides mechanisms for consistent error handling
//! and response formatting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-specific validation error details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn invalid_fields(fields: Vec<FieldError>) -> Self {
        Self::Validation {
            message: "Validation failed".to_string(),
            fields,
        }
    }

    /// A write referenced a row that does not exist.
    pub fn invalid_reference(field: &str, id: i64) -> Self {
        Self::invalid_fields(vec![FieldError::new(
            field,
            format!("Invalid pk \"{}\" - object does not exist.", id),
        )])
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.to_string(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }
}

/// Converts `validator` output into a `ServiceError` carrying field details.
impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    FieldError::new(
                        field.to_string(),
                        error.message.as_deref().unwrap_or("Invalid value"),
                    )
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        Self::invalid_fields(fields)
    }
}

/// Returns true when a repository error came from a violated foreign key constraint.
pub fn is_foreign_key_violation(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_foreign_key_violation()
    )
}

/// Returns true when a repository error came from a violated unique constraint.
pub fn is_unique_violation(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db)) if db.is_unique_violation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1))]
        count: i64,
    }

    #[test]
    fn test_validation_errors_become_sorted_field_errors() {
        let sample = Sample {
            name: String::new(),
            count: 0,
        };

        let error = ServiceError::from(sample.validate().unwrap_err());
        match error {
            ServiceError::Validation { fields, .. } => {
                assert_eq!(
                    fields,
                    vec![
                        FieldError::new("count", "Invalid value"),
                        FieldError::new("name", "Name is required"),
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_reference_names_the_field() {
        match ServiceError::invalid_reference("game", 99) {
            ServiceError::Validation { fields, .. } => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].field, "game");
                assert!(fields[0].message.contains("99"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
