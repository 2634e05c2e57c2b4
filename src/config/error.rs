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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Retry limit must be at least 1")]
    InvalidRetryLimit,

    #[error("Retry limit exceeds maximum allowed (10)")]
    RetryLimitTooLarge,

    #[error("Realtime channel capacity must be at least 1")]
    InvalidChannelCapacity,
}
