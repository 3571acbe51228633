//! Error types for blueprint compilation.

use thiserror::Error;

/// Main error type for blueprint compilation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlueprintError {
    /// A configuration field failed validation. User-correctable; the
    /// caller should surface the named field.
    #[error("validation failed for `{field}`: {message}")]
    Validation { field: &'static str, message: String },

    /// The step dependency graph contains a cycle. This indicates a
    /// catalog-authoring bug, not a user input problem, and should be
    /// treated as a deploy-blocking defect rather than caught and retried.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl BlueprintError {
    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BlueprintError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns true if this error indicates an internal defect rather
    /// than bad user input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BlueprintError::InvariantViolation(_))
    }

    /// Returns the violated configuration field, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BlueprintError::Validation { field, .. } => Some(field),
            BlueprintError::InvariantViolation(_) => None,
        }
    }
}

/// Convenience Result type for blueprint operations.
pub type Result<T> = std::result::Result<T, BlueprintError>;
