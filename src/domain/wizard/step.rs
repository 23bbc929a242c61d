//! WizardStep enum representing the three wizard stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three wizard stages, in the only order they can be visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Profile,
    Concepts,
    Vendors,
}

impl WizardStep {
    /// Returns all steps in canonical order.
    pub fn all() -> &'static [WizardStep] {
        &[WizardStep::Profile, WizardStep::Concepts, WizardStep::Vendors]
    }

    /// Returns the 1-based step number shown to the user.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Profile => 1,
            WizardStep::Concepts => 2,
            WizardStep::Vendors => 3,
        }
    }

    /// Looks up a step by its 1-based number.
    pub fn from_number(number: u8) -> Option<WizardStep> {
        Self::all().iter().copied().find(|s| s.number() == number)
    }

    /// Returns the following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Profile => Some(WizardStep::Concepts),
            WizardStep::Concepts => Some(WizardStep::Vendors),
            WizardStep::Vendors => None,
        }
    }

    /// Returns true if there is no step after this one.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Profile => "Event Profile",
            WizardStep::Concepts => "Concept Selection",
            WizardStep::Vendors => "Vendor Selection",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.display_name())
    }
}
