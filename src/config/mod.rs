//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EVENT_PLANNER` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use event_planner::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Relay listening on {}", config.server.bind_address());
//! ```

mod error;
mod generation;
mod relay;
mod server;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use generation::GenerationConfig;
pub use relay::RelayConfig;
pub use server::{Environment, ServerConfig};
pub use wizard::WizardConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Forwarding endpoint configuration (upstream service)
    #[serde(default)]
    pub relay: RelayConfig,

    /// Generation client configuration (base URL, user id)
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Wizard behavior
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EVENT_PLANNER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EVENT_PLANNER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EVENT_PLANNER__RELAY__UPSTREAM_URL=...` -> `relay.upstream_url = ...`
    /// - `EVENT_PLANNER__WIZARD__CONCEPT_FALLBACK=use_canned_concepts`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EVENT_PLANNER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - Port is non-zero
    /// - URLs use `http://` or `https://`
    /// - Timeouts are within 1..=600 seconds
    /// - Production requires an HTTPS upstream
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.relay.validate(self.is_production())?;
        self.generation.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

const MAX_TIMEOUT_SECS: u64 = 600;

pub(crate) fn validate_url(name: &'static str, url: &str) -> Result<(), ValidationError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(name))
    }
}

pub(crate) fn validate_timeout(name: &'static str, secs: u64) -> Result<(), ValidationError> {
    if (1..=MAX_TIMEOUT_SECS).contains(&secs) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTimeout(name))
    }
}
