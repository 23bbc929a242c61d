//! Wizard module - step progression, session state and recovery data.

mod errors;
mod fallback;
mod feedback;
mod notice;
mod state;
mod step;

pub use errors::WizardError;
pub use fallback::{fallback_concepts, fallback_vendor_categories, ConceptFallbackPolicy};
pub use feedback::{combine_concept_feedback, vendor_feedback};
pub use notice::{FailureKind, WizardNotice};
pub use state::{
    Collection, ConceptChoice, ConceptState, RequestToken, VendorState, WizardState,
};
pub use step::WizardStep;
