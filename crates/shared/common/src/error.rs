//! Unified application error.
//!
//! Services return [`AppResult`]. Domain errors and notification failures
//! convert into [`AppError`], which carries a stable client-facing code and
//! a message that hides internal details.

use domain::{DomainError, ValidationError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authorization
    #[error("Access denied: {0}")]
    Forbidden(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Profile for user {user_id} already exists")]
    Duplicate { user_id: Uuid },

    // Validation
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[error("Failed to deliver {kind} to {recipient}: {cause}")]
    Delivery {
        kind: String,
        recipient: String,
        cause: String,
    },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error body handed to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::Duplicate { .. } => "DUPLICATE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Delivery { .. } => "DELIVERY_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller may retry the same request unchanged.
    ///
    /// Only transport failures qualify; nothing here retries on its own.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Delivery { .. })
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(err) => err.to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Forbidden(_) => "Access denied".to_string(),

            // Hide details for internal/transport errors
            AppError::Delivery {
                kind,
                recipient,
                cause,
            } => {
                tracing::error!(%kind, %recipient, %cause, "Delivery error");
                "The email could not be sent, please try again later".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.user_message(),
            field: match self {
                AppError::Validation(err) => Some(err.field.clone()),
                _ => None,
            },
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(err) => AppError::Validation(err),
            DomainError::Duplicate { user_id } => AppError::Duplicate { user_id },
            DomainError::Forbidden(reason) => AppError::Forbidden(reason),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn duplicate(user_id: Uuid) -> Self {
        AppError::Duplicate { user_id }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        AppError::Forbidden(reason.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
