//! Domain layer - Event records and wizard rules.
//!
//! No I/O happens here. The generation service is reached through the
//! ports defined in [`crate::ports`].

pub mod event;
pub mod foundation;
pub mod wizard;
