//! Application layer - Use cases over the wizard state.
//!
//! This layer drives the domain state through the generation port.

pub mod wizard;

pub use wizard::{StepOutcome, WizardController};
