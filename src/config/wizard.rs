//! Wizard behavior configuration

use serde::Deserialize;

use crate::domain::wizard::ConceptFallbackPolicy;

/// Wizard settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardConfig {
    /// What to show when the first concept request fails
    #[serde(default)]
    pub concept_fallback: ConceptFallbackPolicy,
}
