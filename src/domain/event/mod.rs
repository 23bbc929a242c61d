//! Event module - the records the wizard collects and generates.

mod concept;
mod profile;
mod vendor;

pub use concept::{BudgetLevel, EventConcept};
pub use profile::{EventProfile, ValueRange};
pub use vendor::{Vendor, VendorCategory};
