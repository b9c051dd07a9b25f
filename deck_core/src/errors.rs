//! # Error Types
//!
//! Structured error types for deck_core. The engine degrades gracefully on
//! odd-but-valid geometry (tiny decks, thin slivers) and only returns an error
//! when the input cannot describe a deck at all.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_mm: f64) -> CalcResult<()> {
//!     if height_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height_mm",
//!             height_mm.to_string(),
//!             "Height cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for deck calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The footprint polygon cannot be laid out (too few points, zero area,
    /// self-intersecting edges, ...)
    #[error("Invalid footprint: {reason}")]
    InvalidFootprint { reason: String },

    /// An input value is invalid (out of range, not finite, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Decking profile or timber grade not recognised
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidFootprint error
    pub fn invalid_footprint(reason: impl Into<String>) -> Self {
        CalcError::InvalidFootprint {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidFootprint { .. } => "INVALID_FOOTPRINT",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_footprint("Footprint needs at least 3 points, got 2");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidFootprint\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_footprint("x").error_code(), "INVALID_FOOTPRINT");
        assert_eq!(CalcError::material_not_found("oak").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(
            CalcError::invalid_input("height_mm", "-1", "negative").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
