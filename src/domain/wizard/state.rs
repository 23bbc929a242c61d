//! WizardState - everything one session knows about the wizard.
//!
//! The state is an owned value. User input goes through the public setters,
//! which check that the wizard is on the step the input belongs to.
//! Generated collections are only replaced by the application layer, and
//! only through a [`RequestToken`] that is still current when the result
//! arrives.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use super::errors::WizardError;
use super::notice::WizardNotice;
use super::step::WizardStep;
use crate::domain::event::{EventConcept, EventProfile, VendorCategory};
use crate::domain::foundation::{ConceptId, SessionId};

/// A generated collection that is fetched from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Concepts,
    Vendors,
}

impl Collection {
    /// The step on which this collection is generated and shown.
    pub fn step(&self) -> WizardStep {
        match self {
            Collection::Concepts => WizardStep::Concepts,
            Collection::Vendors => WizardStep::Vendors,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Concepts => f.write_str("concepts"),
            Collection::Vendors => f.write_str("vendors"),
        }
    }
}

/// Ticket for one outstanding generation request.
///
/// Sequence numbers increase monotonically per session. A result is applied
/// only while its token is still the pending one for its collection and the
/// wizard is still on the step that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    sequence: u64,
    collection: Collection,
    step: WizardStep,
}

impl RequestToken {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }
}

/// A selectable concept drawn from a specific batch.
///
/// Only obtainable from [`ConceptState::choices`] or
/// [`ConceptState::choice`], so a selection always names a concept that was
/// actually offered. Choices taken from a replaced batch are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptChoice {
    batch: u64,
    id: ConceptId,
}

impl ConceptChoice {
    pub fn id(&self) -> &ConceptId {
        &self.id
    }
}

/// State local to the concept step.
#[derive(Debug, Clone, Default)]
pub struct ConceptState {
    additional_ideas: String,
    concepts: Vec<EventConcept>,
    batch: u64,
    selected_concept_id: Option<ConceptId>,
    feedback_liked: String,
    feedback_disliked: String,
    show_feedback_form: bool,
    placeholder: bool,
    error: Option<WizardNotice>,
}

impl ConceptState {
    pub fn additional_ideas(&self) -> &str {
        &self.additional_ideas
    }

    pub fn concepts(&self) -> &[EventConcept] {
        &self.concepts
    }

    pub fn has_concepts(&self) -> bool {
        !self.concepts.is_empty()
    }

    pub fn selected_concept_id(&self) -> Option<&ConceptId> {
        self.selected_concept_id.as_ref()
    }

    /// The selected concept, if the selection names one in the current batch.
    pub fn selected_concept(&self) -> Option<&EventConcept> {
        let id = self.selected_concept_id.as_ref()?;
        self.concepts.iter().find(|c| c.id() == id)
    }

    pub fn feedback_liked(&self) -> &str {
        &self.feedback_liked
    }

    pub fn feedback_disliked(&self) -> &str {
        &self.feedback_disliked
    }

    pub fn show_feedback_form(&self) -> bool {
        self.show_feedback_form
    }

    /// True when the current concepts are canned placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// The last generation failure, cleared when a new request starts.
    pub fn error(&self) -> Option<&WizardNotice> {
        self.error.as_ref()
    }

    /// Selectable handles for every concept in the current batch.
    pub fn choices(&self) -> Vec<ConceptChoice> {
        self.concepts
            .iter()
            .map(|c| ConceptChoice {
                batch: self.batch,
                id: c.id().clone(),
            })
            .collect()
    }

    /// Selectable handle for one concept of the current batch.
    pub fn choice(&self, id: &ConceptId) -> Option<ConceptChoice> {
        self.concepts.iter().find(|c| c.id() == id).map(|c| ConceptChoice {
            batch: self.batch,
            id: c.id().clone(),
        })
    }

    /// Swaps in a new batch in one step, dropping a selection that does not
    /// name a concept of the new batch.
    pub(crate) fn replace_concepts(&mut self, concepts: Vec<EventConcept>, placeholder: bool) {
        self.concepts = concepts;
        self.batch += 1;
        self.placeholder = placeholder;

        let still_present = self
            .selected_concept_id
            .as_ref()
            .is_some_and(|id| self.concepts.iter().any(|c| c.id() == id));
        if !still_present {
            self.selected_concept_id = None;
        }
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.feedback_liked.clear();
        self.feedback_disliked.clear();
        self.show_feedback_form = false;
    }

    pub(crate) fn hide_feedback_form(&mut self) {
        self.show_feedback_form = false;
    }

    pub(crate) fn set_error(&mut self, error: Option<WizardNotice>) {
        self.error = error;
    }
}

/// State local to the vendor step.
#[derive(Debug, Clone, Default)]
pub struct VendorState {
    vendor_feedback: String,
    categories: Vec<VendorCategory>,
    placeholder: bool,
    error: Option<WizardNotice>,
}

impl VendorState {
    pub fn vendor_feedback(&self) -> &str {
        &self.vendor_feedback
    }

    pub fn categories(&self) -> &[VendorCategory] {
        &self.categories
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// True when the current categories are canned placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn error(&self) -> Option<&WizardNotice> {
        self.error.as_ref()
    }

    pub(crate) fn replace_categories(&mut self, categories: Vec<VendorCategory>, placeholder: bool) {
        self.categories = categories;
        self.placeholder = placeholder;
    }

    pub(crate) fn clear_feedback(&mut self) {
        self.vendor_feedback.clear();
    }

    pub(crate) fn set_error(&mut self, error: Option<WizardNotice>) {
        self.error = error;
    }
}

#[derive(Debug, Clone, Default)]
struct InFlight {
    concepts: Option<RequestToken>,
    vendors: Option<RequestToken>,
}

impl InFlight {
    fn slot(&mut self, collection: Collection) -> &mut Option<RequestToken> {
        match collection {
            Collection::Concepts => &mut self.concepts,
            Collection::Vendors => &mut self.vendors,
        }
    }

    fn get(&self, collection: Collection) -> Option<RequestToken> {
        match collection {
            Collection::Concepts => self.concepts,
            Collection::Vendors => self.vendors,
        }
    }
}

/// The full state of one wizard session.
#[derive(Debug, Clone)]
pub struct WizardState {
    session_id: SessionId,
    current_step: WizardStep,
    profile: EventProfile,
    concepts: ConceptState,
    vendors: VendorState,
    in_flight: InFlight,
    next_sequence: u64,
}

impl WizardState {
    /// Starts a new session on step 1 with a default profile.
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            current_step: WizardStep::Profile,
            profile: EventProfile::default(),
            concepts: ConceptState::default(),
            vendors: VendorState::default(),
            in_flight: InFlight::default(),
            next_sequence: 0,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn profile(&self) -> &EventProfile {
        &self.profile
    }

    pub fn concepts(&self) -> &ConceptState {
        &self.concepts
    }

    pub fn vendors(&self) -> &VendorState {
        &self.vendors
    }

    /// Mutable access to the profile, available only on step 1.
    pub fn profile_mut(&mut self) -> Result<&mut EventProfile, WizardError> {
        self.require_step(WizardStep::Profile)?;
        Ok(&mut self.profile)
    }

    pub fn set_additional_ideas(&mut self, ideas: impl Into<String>) -> Result<(), WizardError> {
        self.require_step(WizardStep::Concepts)?;
        self.concepts.additional_ideas = ideas.into();
        Ok(())
    }

    pub fn set_concept_feedback(
        &mut self,
        liked: impl Into<String>,
        disliked: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.require_step(WizardStep::Concepts)?;
        self.concepts.feedback_liked = liked.into();
        self.concepts.feedback_disliked = disliked.into();
        Ok(())
    }

    pub fn set_feedback_form_visible(&mut self, visible: bool) -> Result<(), WizardError> {
        self.require_step(WizardStep::Concepts)?;
        self.concepts.show_feedback_form = visible;
        Ok(())
    }

    /// Selects a concept from the current batch.
    pub fn select_concept(&mut self, choice: &ConceptChoice) -> Result<(), WizardError> {
        self.require_step(WizardStep::Concepts)?;
        if choice.batch != self.concepts.batch || self.concepts.choice(&choice.id).is_none() {
            return Err(WizardError::StaleSelection);
        }
        self.concepts.selected_concept_id = Some(choice.id.clone());
        Ok(())
    }

    pub fn set_vendor_feedback(&mut self, text: impl Into<String>) -> Result<(), WizardError> {
        self.require_step(WizardStep::Vendors)?;
        self.vendors.vendor_feedback = text.into();
        Ok(())
    }

    /// Returns true if [`advance`](Self::advance) would succeed.
    pub fn can_advance(&self) -> bool {
        match self.current_step {
            WizardStep::Profile => true,
            WizardStep::Concepts => self.concepts.selected_concept().is_some(),
            WizardStep::Vendors => false,
        }
    }

    /// Moves to the next step.
    ///
    /// Leaving a step abandons any request it issued; the late result will
    /// be discarded when it arrives.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        let from = self.current_step;
        let to = from.next().ok_or(WizardError::FinalStep(from))?;

        if from == WizardStep::Concepts && self.concepts.selected_concept().is_none() {
            return Err(WizardError::SelectionRequired);
        }

        for collection in [Collection::Concepts, Collection::Vendors] {
            let slot = self.in_flight.slot(collection);
            if slot.is_some_and(|token| token.step == from) {
                *slot = None;
            }
        }

        info!(session_id = %self.session_id, %from, %to, "Wizard advanced");
        self.current_step = to;
        Ok(to)
    }

    /// Returns true while a request for the collection is outstanding.
    pub fn is_in_flight(&self, collection: Collection) -> bool {
        self.in_flight.get(collection).is_some()
    }

    /// Drops the outstanding request for a collection without applying it.
    pub fn cancel_request(&mut self, collection: Collection) {
        *self.in_flight.slot(collection) = None;
    }

    /// Registers a new outstanding request for a collection.
    pub(crate) fn begin_request(
        &mut self,
        collection: Collection,
    ) -> Result<RequestToken, WizardError> {
        self.require_step(collection.step())?;
        if self.is_in_flight(collection) {
            return Err(WizardError::RequestInFlight(collection));
        }

        self.next_sequence += 1;
        let token = RequestToken {
            sequence: self.next_sequence,
            collection,
            step: self.current_step,
        };
        *self.in_flight.slot(collection) = Some(token);
        Ok(token)
    }

    /// Resolves a request token. Returns true if its result may be applied.
    pub(crate) fn settle_request(&mut self, token: RequestToken) -> bool {
        let slot = self.in_flight.slot(token.collection);
        if *slot != Some(token) {
            return false;
        }
        *slot = None;
        self.current_step == token.step
    }

    pub(crate) fn concepts_mut(&mut self) -> &mut ConceptState {
        &mut self.concepts
    }

    pub(crate) fn vendors_mut(&mut self) -> &mut VendorState {
        &mut self.vendors
    }

    fn require_step(&self, step: WizardStep) -> Result<(), WizardError> {
        if self.current_step == step {
            Ok(())
        } else {
            Err(WizardError::wrong_step(step, self.current_step))
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
