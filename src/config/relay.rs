//! Relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::{validate_timeout, validate_url};

/// Settings of the forwarding endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// Generation service the relay forwards to
    #[serde(default = "default_upstream_url")]
    pub upstream_url: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RelayConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate relay configuration
    pub fn validate(&self, is_production: bool) -> Result<(), ValidationError> {
        validate_url("relay upstream", &self.upstream_url)?;
        validate_timeout("relay", self.timeout_secs)?;
        if is_production && !self.upstream_url.starts_with("https://") {
            return Err(ValidationError::UpstreamMustBeHttps);
        }
        Ok(())
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: default_upstream_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_upstream_url() -> String {
    "https://ai-event-planner-server.onrender.com".to_string()
}

fn default_timeout() -> u64 {
    120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_in_production() {
        let config = RelayConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(120));
        assert!(config.validate(true).is_ok());
    }

    #[test]
    fn plain_http_upstream_is_rejected_in_production() {
        let config = RelayConfig {
            upstream_url: "http://localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(config.validate(false).is_ok());
        assert_eq!(config.validate(true), Err(ValidationError::UpstreamMustBeHttps));
    }

    #[test]
    fn non_http_upstream_is_rejected() {
        let config = RelayConfig {
            upstream_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(false),
            Err(ValidationError::InvalidUrl("relay upstream"))
        );
    }
}
