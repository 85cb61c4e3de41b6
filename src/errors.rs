//! # Error Types
//!
//! Structured error types for joints_core. Each variant carries enough
//! context to identify the offending input without re-running the
//! calculation, and all variants serialize cleanly to JSON for consumers
//! that display or log them.
//!
//! ## Example
//!
//! ```rust
//! use joints_core::errors::{CalcError, CalcResult};
//!
//! fn validate_depth(depth_mm: f64) -> CalcResult<()> {
//!     if depth_mm < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "countersink_depth_mm",
//!             depth_mm.to_string(),
//!             "Countersink depth must be zero or positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for joints_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for bolt capacity calculations.
///
/// All errors are raised at the point of the offending lookup or property
/// access; there is no retry or recovery inside the library.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of its allowed domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A tabulated code value is absent for the given key
    #[error("No entry in {table} for '{key}'")]
    LookupNotFound { table: String, key: String },

    /// A capacity check needs data the input did not supply
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a LookupNotFound error
    pub fn lookup_not_found(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::LookupNotFound {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::LookupNotFound { .. } => "LOOKUP_NOT_FOUND",
            CalcError::MissingField { .. } => "MISSING_FIELD",
        }
    }
}
