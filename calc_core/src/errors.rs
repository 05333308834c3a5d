//! # Error Types
//!
//! Structured error types for calc_core. Every failure the engines can
//! produce is a value of [`CalcError`]; nothing panics across the crate
//! boundary. Callers match on the variant (or on [`CalcError::error_code`])
//! and decide how to present it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_side(field: &str, value: f64) -> CalcResult<f64> {
//!     if !value.is_finite() {
//!         return Err(CalcError::invalid_input(field, value.to_string(), "Side must be a finite number"));
//!     }
//!     Ok(value)
//! }
//!
//! assert!(checked_side("a", f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Serialized as `{"type": "...", "details": {...}}` so JSON consumers
/// can dispatch on the tag.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A required numeric operand is absent or not an integer
    #[error("Missing operand: {field}")]
    MissingOperand { field: String },

    /// A denominator (given or produced) is zero
    #[error("Undefined (division by zero) in {operation}")]
    DivisionByZero { operation: String },

    /// Side lengths fail the strict triangle inequality
    #[error("Not a valid triangle: sides {a}, {b}, {c}")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    /// Neither a full side set nor a base/height pair was given
    #[error("Insufficient data: {reason}")]
    InsufficientData { reason: String },

    /// An input value is present but unusable (non-finite, non-positive, malformed)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Integer arithmetic left the representable range
    #[error("Overflow in {operation}")]
    Overflow { operation: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create a MissingOperand error
    pub fn missing_operand(field: impl Into<String>) -> Self {
        CalcError::MissingOperand { field: field.into() }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            operation: operation.into(),
        }
    }

    /// Create an InvalidTriangle error
    pub fn invalid_triangle(a: f64, b: f64, c: f64) -> Self {
        CalcError::InvalidTriangle { a, b, c }
    }

    /// Create an InsufficientData error
    pub fn insufficient_data(reason: impl Into<String>) -> Self {
        CalcError::InsufficientData { reason: reason.into() }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        CalcError::Overflow {
            operation: operation.into(),
        }
    }

    /// Short label for display next to a result field ("Undefined", "Invalid", ...)
    pub fn display_label(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero { .. } => "Undefined",
            CalcError::InvalidTriangle { .. } => "Invalid",
            CalcError::InsufficientData { .. } => "Insufficient data",
            CalcError::MissingOperand { .. } => "Missing",
            CalcError::Overflow { .. } => "Overflow",
            _ => "Error",
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MissingOperand { .. } => "MISSING_OPERAND",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::InvalidTriangle { .. } => "INVALID_TRIANGLE",
            CalcError::InsufficientData { .. } => "INSUFFICIENT_DATA",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Overflow { .. } => "OVERFLOW",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError { reason: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("a", "-5", "Side must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_tagging() {
        let json = serde_json::to_value(CalcError::division_by_zero("divide")).unwrap();
        assert_eq!(json["type"], "DivisionByZero");
        assert_eq!(json["details"]["operation"], "divide");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_operand("numerator").error_code(), "MISSING_OPERAND");
        assert_eq!(CalcError::invalid_triangle(1.0, 2.0, 3.0).error_code(), "INVALID_TRIANGLE");
        assert_eq!(CalcError::insufficient_data("none").error_code(), "INSUFFICIENT_DATA");
    }

    #[test]
    fn test_division_by_zero_reads_as_undefined() {
        let error = CalcError::division_by_zero("divide");
        assert!(error.to_string().starts_with("Undefined"));
        assert_eq!(error.display_label(), "Undefined");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CalcError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
