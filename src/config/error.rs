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

    #[error("Invalid {0} timeout (expected 1..=600 seconds)")]
    InvalidTimeout(&'static str),

    #[error("Invalid {0} URL (expected http:// or https://)")]
    InvalidUrl(&'static str),

    #[error("Upstream URL must use HTTPS in production")]
    UpstreamMustBeHttps,
}
