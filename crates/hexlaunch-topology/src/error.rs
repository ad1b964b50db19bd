//! Error types for hexlaunch-topology.

use thiserror::Error;

use crate::Hex;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while allocating or querying the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An argument was outside the accepted domain.
    #[error("invalid argument `{name}`: {value} (must be greater than or equal to zero)")]
    InvalidArgument { name: &'static str, value: i64 },

    /// No payload occupies the requested hex.
    #[error("no payload at hex {0}")]
    NotFound(Hex),

    /// An internal invariant was broken. Never transient; do not retry.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
