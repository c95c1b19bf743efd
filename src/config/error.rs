//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when loading or validating a [`DossierConfig`](super::DossierConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A schedule boundary is not a valid hour of the day
    #[error("{field} must be between 0 and 23, got {hour}")]
    InvalidHour { field: &'static str, hour: u32 },

    /// A tick interval was set to zero
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("History capacity must be at least 1")]
    ZeroCapacity,

    #[error("History seed must contain at least one reading")]
    EmptySeed,

    /// JSON configuration could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
