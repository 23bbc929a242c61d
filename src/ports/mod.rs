//! Ports - Interfaces the application layer depends on.
//!
//! Adapters in [`crate::adapters`] provide the implementations.

mod generation_client;

pub use generation_client::{GenerationClient, GenerationError};
