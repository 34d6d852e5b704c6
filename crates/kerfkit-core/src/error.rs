//! Error handling for KerfKit
//!
//! Generators fail at their boundary instead of emitting undefined geometry:
//! - Feature-code errors (unknown direction, modifier or level characters)
//! - Degenerate geometry (arcs that cannot be solved)
//! - Invalid arguments (unsupported arities, non-finite or out-of-range values)
//! - I/O errors while exporting
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Main error type for KerfKit
#[derive(Error, Debug)]
pub enum Error {
    /// A feature code could not be parsed
    #[error("Invalid feature code '{code}': {reason}")]
    InvalidCode {
        /// The offending code as supplied.
        code: String,
        /// Why the code was rejected.
        reason: String,
    },

    /// The requested geometry has no finite solution
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// A parameter has an unsupported value or shape
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The parameter name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Shorthand for [`Error::InvalidCode`]
    pub fn invalid_code(code: &str, reason: impl Into<String>) -> Self {
        Error::InvalidCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for KerfKit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reject NaN and infinite parameters before they reach the geometry.
pub fn ensure_finite(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_argument(name, format!("must be finite, got {}", value)))
    }
}
