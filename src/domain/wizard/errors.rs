//! Errors raised by wizard state operations.

use thiserror::Error;

use super::state::Collection;
use super::step::WizardStep;
use crate::domain::foundation::ValidationError;

/// A wizard operation was attempted in a state that does not allow it.
///
/// These never end the session; the caller can correct the input and retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("operation requires step {expected}, wizard is on step {actual}")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("a concept must be selected before continuing")]
    SelectionRequired,

    #[error("concept choice does not belong to the current batch")]
    StaleSelection,

    #[error("a {0} request is already in flight")]
    RequestInFlight(Collection),

    #[error("step {0} is the final step")]
    FinalStep(WizardStep),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl WizardError {
    pub fn wrong_step(expected: WizardStep, actual: WizardStep) -> Self {
        WizardError::WrongStep { expected, actual }
    }
}
