//! Generation Adapters.
//!
//! Implementations of the GenerationClient port plus the mapping to and
//! from the generation service's wire schema.
//!
//! ## Available Adapters
//!
//! - `HttpGenerationClient` - JSON over HTTP via the forwarding endpoint
//! - `MockGenerationClient` - Configurable mock for testing

mod http_client;
mod mock_client;
pub mod schema;
pub mod transform;

pub use http_client::{classify_failure, HttpGenerationClient, HttpGenerationConfig, DEFAULT_USER_ID};
pub use mock_client::{MockGenerationClient, RecordedCall};
