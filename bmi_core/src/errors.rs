//! # Error Types
//!
//! Structured error types for bmi_core. The BMI pipeline itself never fails
//! (invalid measurements degrade to an undefined BMI), so these errors only
//! appear at the edges: constructing a [`Measurement`](crate::units::Measurement),
//! checking entry bounds, parsing unit names and loading settings files.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::errors::{BmiError, BmiResult};
//!
//! fn validate_height(height_cm: f64) -> BmiResult<()> {
//!     if height_cm <= 0.0 {
//!         return Err(BmiError::InvalidInput {
//!             field: "height".to_string(),
//!             value: height_cm.to_string(),
//!             reason: "Height must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bmi_core operations
pub type BmiResult<T> = Result<T, BmiError>;

/// Structured error type for input handling and settings operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BmiError {
    /// An input value is invalid (non-positive, out of range, not a number)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A unit or unit system name could not be recognized
    #[error("Unknown unit: {unit}")]
    UnknownUnit { unit: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Settings schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl BmiError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        BmiError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        BmiError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        BmiError::UnknownUnit { unit: unit.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        BmiError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field, if this error is about one
    pub fn field(&self) -> Option<&str> {
        match self {
            BmiError::InvalidInput { field, .. } | BmiError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BmiError::InvalidInput { .. } => "INVALID_INPUT",
            BmiError::MissingField { .. } => "MISSING_FIELD",
            BmiError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            BmiError::FileError { .. } => "FILE_ERROR",
            BmiError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BmiError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
