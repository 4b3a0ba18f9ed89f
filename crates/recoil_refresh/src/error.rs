//! Refresh control error types

use thiserror::Error;

/// Structural errors. State-discipline cases (finishing while not loading,
/// starting twice) are not errors; those commands are simply rejected.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// `expanded_height` must be a positive, finite length
    #[error("Expanded height must be positive and finite, got {0}")]
    InvalidExpandedHeight(f32),

    /// Failed to parse a TOML configuration
    #[error("Failed to parse refresh config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to write a TOML configuration
    #[error("Failed to serialize refresh config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for refresh control operations
pub type Result<T> = std::result::Result<T, RefreshError>;
