//! Generation client configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::{validate_timeout, validate_url};

/// Settings of the client the wizard uses to reach the forwarding endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the forwarding endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Value sent as the `user_id` query parameter
    pub user_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl GenerationConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate generation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_url("generation base", &self.base_url)?;
        validate_timeout("generation", self.timeout_secs)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_id: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout() -> u64 {
    120
}
