//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Bar fill must be a #rgb or #rrggbb colour, got '{0}'")]
    InvalidBarFill(String),

    #[error("Text chart width must be between 10 and 200")]
    InvalidTextWidth,

    #[error("Score precision must be at most 4 decimal places")]
    InvalidScorePrecision,
}
