//! Foundation module - Shared domain primitives.
//!
//! Identifiers and validation errors used across the event and wizard
//! modules.

mod errors;
mod ids;

pub use errors::ValidationError;
pub use ids::{next_id_stamp, CategoryId, ConceptId, SessionId, VendorId};
