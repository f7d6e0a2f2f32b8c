//! Error types for the tangency solver.

use thiserror::Error;

/// Errors that can occur before a solve starts.
///
/// Geometric degeneracies (parallel planes, no real roots, ...) are not
/// errors; they are reported through [`crate::Outcome::Degenerate`].
#[derive(Error, Debug)]
pub enum TangentError {
    /// An input coordinate is NaN or infinite.
    #[error("non-finite input: {input}")]
    NonFinite {
        /// Which input was rejected.
        input: &'static str,
    },

    /// A tolerance is not a finite, strictly positive number.
    #[error("invalid tolerance `{name}`: {value}")]
    InvalidTolerance {
        /// Field name in [`crate::Tolerances`].
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Tolerance configuration text could not be parsed.
    #[error("invalid tolerance configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, TangentError>;
