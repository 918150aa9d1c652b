//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (storage, mail transport).

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single field-level constraint violation.
///
/// `field` is the qualified path of the offending field
/// (e.g. `workExperience[1].endDate`), `constraint` a stable label of the
/// rule that failed and `value` the rejected value as text.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field} violates {constraint} (value: {value:?})")]
pub struct ValidationError {
    pub field: String,
    pub constraint: String,
    pub value: String,
}

impl ValidationError {
    pub fn new(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            constraint: constraint.into(),
            value: value.into(),
        }
    }
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// A field failed its schema constraints
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A profile already exists for this user
    #[error("Profile for user {user_id} already exists")]
    Duplicate { user_id: Uuid },

    /// Action not allowed for this user
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(
        field: impl Into<String>,
        constraint: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        DomainError::Validation(ValidationError::new(field, constraint, value))
    }

    /// Create a duplicate error
    pub fn duplicate(user_id: Uuid) -> Self {
        DomainError::Duplicate { user_id }
    }

    /// Create a forbidden error
    pub fn forbidden(reason: impl Into<String>) -> Self {
        DomainError::Forbidden(reason.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("workExperience[1].endDate", "not_before(startDate)", "2019-01-01");
        assert_eq!(
            err.to_string(),
            r#"workExperience[1].endDate violates not_before(startDate) (value: "2019-01-01")"#
        );
    }

    #[test]
    fn test_validation_error_wraps_into_domain_error() {
        let err: DomainError = ValidationError::new("bio", "max_length(1000)", "...").into();
        assert_eq!(err.to_string(), r#"Validation error: bio violates max_length(1000) (value: "...")"#);
    }
}
