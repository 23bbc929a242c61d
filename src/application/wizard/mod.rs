//! Wizard application service.

mod controller;

pub use controller::{
    ConceptTrigger, ConceptsCompletion, ConceptsJob, StepOutcome, VendorTrigger,
    VendorsCompletion, VendorsJob, WizardController,
};
