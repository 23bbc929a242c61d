//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `generation` - Generation service clients and the wire schema mapping
//! - `relay` - HTTP forwarding endpoint in front of the generation service

pub mod generation;
pub mod relay;

pub use generation::{HttpGenerationClient, HttpGenerationConfig, MockGenerationClient};
pub use relay::{relay_router, RelayState};
