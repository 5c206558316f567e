//! Error types for rusthist-core.

use thiserror::Error;

/// Result type alias for rusthist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for rusthist operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Array length inconsistent with the histogram shape.
    #[error("shape mismatch for {context}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Which array or argument failed the check.
        context: &'static str,
        /// Length required by the current shape.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Zero-magnitude step in a rebin-parameter list.
    #[error("invalid binning step at parameter index {index}: step must be non-zero")]
    InvalidStep {
        /// Index of the offending step in the parameter list.
        index: usize,
    },

    /// Malformed rebin-parameter list.
    #[error("invalid rebin parameters: {0}")]
    InvalidParameters(String),

    /// Consecutive equal X values in an output axis while normalizing a
    /// distribution.
    #[error("invalid output axis: zero-width bin at index {bin}")]
    DegenerateAxis {
        /// Index of the zero-width bin.
        bin: usize,
    },
}
