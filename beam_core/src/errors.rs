//! # Error Types
//!
//! Structured error types for beam_core. Each variant carries enough context
//! to explain what went wrong without parsing the message text.
//!
//! Two of the variants never reach the caller of a design search:
//! [`DesignError::DegenerateGeometry`] and [`DesignError::SolverFailed`] are
//! absorbed by the search, which scores the offending candidate as
//! non-competitive and moves on.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{DesignError, DesignResult};
//!
//! fn validate_target(target_lb: f64) -> DesignResult<()> {
//!     if target_lb < 0.0 {
//!         return Err(DesignError::InvalidInput {
//!             field: "target_lb".to_string(),
//!             value: target_lb.to_string(),
//!             reason: "Target load cannot be negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DesignError {
    /// An input value is invalid (negative target, inverted bounds, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A section property or formula denominator is zero or negative
    #[error("Degenerate geometry: {quantity} = {value}")]
    DegenerateGeometry { quantity: String, value: f64 },

    /// The inner minimizer failed or could not report a usable point
    #[error("Solver failed: {reason}")]
    SolverFailed { reason: String },

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

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl DesignError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate(quantity: impl Into<String>, value: f64) -> Self {
        DesignError::DegenerateGeometry {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create a SolverFailed error
    pub fn solver_failed(reason: impl Into<String>) -> Self {
        DesignError::SolverFailed {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the search can absorb this error and keep enumerating
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DesignError::DegenerateGeometry { .. } | DesignError::SolverFailed { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DesignError::InvalidInput { .. } => "INVALID_INPUT",
            DesignError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            DesignError::SolverFailed { .. } => "SOLVER_FAILED",
            DesignError::FileError { .. } => "FILE_ERROR",
            DesignError::SerializationError { .. } => "SERIALIZATION_ERROR",
            DesignError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for DesignError {
    fn from(e: serde_json::Error) -> Self {
        DesignError::SerializationError {
            reason: e.to_string(),
        }
    }
}
