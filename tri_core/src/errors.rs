//! # Error Types
//!
//! Structured error types for tri_core. Every way a submission can fail is a
//! variant here, so hosts can turn failures into user-visible messages
//! instead of faults.
//!
//! ## Example
//!
//! ```rust
//! use tri_core::errors::{TriangleError, TriResult};
//!
//! fn require_field(value: Option<&str>) -> TriResult<&str> {
//!     value.ok_or_else(|| TriangleError::missing_input("side1"))
//! }
//!
//! assert_eq!(require_field(None).unwrap_err().error_code(), "MISSING_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sides::SideTriple;

/// Result type alias for tri_core operations
pub type TriResult<T> = Result<T, TriangleError>;

/// Structured error type for triangle operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TriangleError {
    /// An input field is absent from the host environment
    #[error("Missing input field: {field}")]
    MissingInput { field: String },

    /// A field's text is blank after trimming
    #[error("Empty value for '{field}'")]
    EmptyValue { field: String },

    /// A field's text does not parse as a finite number
    #[error("Value for '{field}' is not a number: '{value}'")]
    NonNumericInput { field: String, value: String },

    /// The longest side is not strictly shorter than the sum of the others
    #[error("Triangle inequality violated for sides {sides}")]
    InequalityViolated { sides: SideTriple },

    /// A settings file could not be read or parsed
    #[error("Settings error on '{path}': {reason}")]
    Settings { path: String, reason: String },
}

impl TriangleError {
    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        TriangleError::MissingInput {
            field: field.into(),
        }
    }

    /// Create an EmptyValue error
    pub fn empty_value(field: impl Into<String>) -> Self {
        TriangleError::EmptyValue {
            field: field.into(),
        }
    }

    /// Create a NonNumericInput error
    pub fn non_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        TriangleError::NonNumericInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an InequalityViolated error
    pub fn inequality_violated(sides: SideTriple) -> Self {
        TriangleError::InequalityViolated { sides }
    }

    /// Create a Settings error
    pub fn settings(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TriangleError::Settings {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for failures caused by the text typed into a side field.
    ///
    /// These all collapse to the same "not numbers" message when presented.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            TriangleError::MissingInput { .. }
                | TriangleError::EmptyValue { .. }
                | TriangleError::NonNumericInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TriangleError::MissingInput { .. } => "MISSING_INPUT",
            TriangleError::EmptyValue { .. } => "EMPTY_VALUE",
            TriangleError::NonNumericInput { .. } => "NON_NUMERIC_INPUT",
            TriangleError::InequalityViolated { .. } => "INEQUALITY_VIOLATED",
            TriangleError::Settings { .. } => "SETTINGS_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = TriangleError::non_numeric("side2", "abc");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NonNumericInput\""));
        let roundtrip: TriangleError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(TriangleError::missing_input("side1").error_code(), "MISSING_INPUT");
        assert_eq!(TriangleError::empty_value("side3").error_code(), "EMPTY_VALUE");
        assert_eq!(
            TriangleError::inequality_violated(SideTriple::new(1.0, 1.0, 5.0)).error_code(),
            "INEQUALITY_VIOLATED"
        );
    }

    #[test]
    fn test_input_error_grouping() {
        assert!(TriangleError::empty_value("side1").is_input_error());
        assert!(TriangleError::non_numeric("side1", "x").is_input_error());
        assert!(!TriangleError::inequality_violated(SideTriple::new(2.0, 3.0, 5.0)).is_input_error());
        assert!(!TriangleError::settings("a.json", "bad").is_input_error());
    }

    #[test]
    fn test_inequality_message_lists_sides() {
        let error = TriangleError::inequality_violated(SideTriple::new(5.0, 1.0, 1.0));
        assert_eq!(error.to_string(), "Triangle inequality violated for sides 1, 1, 5");
    }
}
