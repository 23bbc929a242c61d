//! Relay HTTP adapter module.
//!
//! Same-origin forwarding endpoint in front of the generation service.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorEnvelope, HealthResponse, UserQuery};
pub use handlers::{RelayError, RelayState};
pub use routes::{cors_layer, relay_router};
