//! Error types for the scoring engine boundary
//!
//! The scoring core itself is total: every aggregation function is defined
//! for all well-formed input, including empty sample sets. Errors only
//! arise at the crate boundary — strict category parsing, run-file I/O,
//! and JSON serialization.

use thiserror::Error;

/// Errors produced at the engine boundary
#[derive(Debug, Error)]
pub enum PuntuarError {
    /// A label that must name one of the four fixed categories did not
    #[error("unknown category '{label}' (expected Physics, General, Image manipulation, or Video manipulation)")]
    UnknownCategory {
        /// The label that failed to match
        label: String,
    },

    /// Run-input file could not be read or the report could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Run-input or report JSON was malformed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible engine-boundary operations
pub type Result<T> = std::result::Result<T, PuntuarError>;
