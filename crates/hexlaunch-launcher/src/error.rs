//! Error types for the launcher layer.

use thiserror::Error;

/// Result type for launcher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the launcher layout.
#[derive(Debug, Error)]
pub enum Error {
    /// The grid rejected an operation
    #[error("Topology error: {0}")]
    Topology(#[from] hexlaunch_topology::Error),

    /// A configuration value could not be used
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
