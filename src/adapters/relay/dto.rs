//! HTTP DTOs for the relay endpoints.
//!
//! Request and response bodies of the generation routes are passed through
//! as opaque JSON, so only the query string and the health payload are
//! typed here. Error bodies reuse [`ErrorEnvelope`].

use serde::{Deserialize, Serialize};

use crate::adapters::generation::DEFAULT_USER_ID;

pub use crate::adapters::generation::schema::ErrorEnvelope;

/// Query string accepted by the generation routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    /// The caller's user id, or the default when absent or blank.
    pub fn user_id(&self) -> &str {
        match self.user_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => DEFAULT_USER_ID,
        }
    }
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
}
