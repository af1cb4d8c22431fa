//! # Error Types
//!
//! Structured error types for photo_core. Every failure a calculator can
//! report is a variant here, carrying enough context for a front-end to show
//! a human-readable message or branch on a stable error code.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::errors::{CalcError, CalcResult};
//!
//! fn validate_aperture(aperture: f64) -> CalcResult<()> {
//!     if aperture <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "aperture".to_string(),
//!             value: aperture.to_string(),
//!             reason: "Aperture must be a positive number".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for photo_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Degenerate optics geometry (a near/far denominator reaching zero) is not an
/// error: the depth-of-field engine resolves it with its infinity and clamp
/// rules, so the calculators are total over their validated input domain.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, not a number, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Several fields failed validation at once
    #[error("{}", messages.join(", "))]
    Validation { messages: Vec<String> },

    /// A preset key (unit system, quality tier, medium, ...) is not in the catalog
    #[error("Unknown {kind}: {key}")]
    UnknownOption { kind: String, key: String },

    /// The request named an action the calculator does not provide
    #[error("Unknown action: {action}")]
    UnknownOperation { action: String },

    /// The request carried no action at all
    #[error("Method not allowed")]
    MissingAction,

    /// JSON serialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(kind: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(action: impl Into<String>) -> Self {
        CalcError::UnknownOperation {
            action: action.into(),
        }
    }

    /// Collapse a list of field errors into one error.
    ///
    /// A single error is returned unchanged; several become `Validation`.
    pub fn from_many(mut errors: Vec<CalcError>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(CalcError::Validation {
                messages: errors.iter().map(CalcError::user_message).collect(),
            }),
        }
    }

    /// Message suitable for showing to the person who filled in the form.
    ///
    /// For `InvalidInput` this is just the reason, without the field/value prefix.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::InvalidInput { reason, .. } => reason.clone(),
            CalcError::UnknownOperation { .. } => "Unknown action".to_string(),
            other => other.to_string(),
        }
    }

    /// True for errors caused by the values a person typed into the form.
    ///
    /// These are shown next to the form rather than treated as a bad request.
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. } | CalcError::Validation { .. } | CalcError::UnknownOption { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Validation { .. } => "VALIDATION_FAILED",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            CalcError::MissingAction => "MISSING_ACTION",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
