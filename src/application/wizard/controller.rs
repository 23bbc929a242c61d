//! WizardController - drives generation requests for the wizard.
//!
//! Every request runs in three phases:
//!
//! 1. `begin_*` validates the step, registers a [`RequestToken`] and copies
//!    everything the request needs out of the state into a job.
//! 2. `execute_*` awaits the generation client. It does not touch the state,
//!    so callers may release their borrow across the await.
//! 3. `apply_*` folds the completion back into the state. Completions whose
//!    token is no longer pending, or whose step was left, are discarded.
//!
//! The one-call methods (`generate_concepts`, `enter_vendors`, ...) chain the
//! three phases for callers that hold the state for the whole request.

use std::sync::Arc;

use crate::domain::event::{EventConcept, EventProfile, VendorCategory};
use crate::domain::wizard::{
    combine_concept_feedback, fallback_concepts, fallback_vendor_categories, vendor_feedback,
    Collection, ConceptFallbackPolicy, RequestToken, WizardError, WizardNotice, WizardState,
    WizardStep,
};
use crate::ports::{GenerationClient, GenerationError};

/// What started a concept request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptTrigger {
    /// First suggestion for the profile.
    Initial,
    /// Regeneration with the liked/disliked feedback.
    Feedback,
}

/// What started a vendor request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorTrigger {
    /// Entering the vendor step.
    Entry,
    /// Regeneration with the vendor feedback.
    Feedback,
}

/// A concept request detached from the wizard state.
#[derive(Debug, Clone)]
pub struct ConceptsJob {
    token: RequestToken,
    trigger: ConceptTrigger,
    profile: EventProfile,
    additional_ideas: String,
    feedback: Option<String>,
}

impl ConceptsJob {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

/// A vendor request detached from the wizard state.
#[derive(Debug, Clone)]
pub struct VendorsJob {
    token: RequestToken,
    trigger: VendorTrigger,
    profile: EventProfile,
    feedback: Option<String>,
}

impl VendorsJob {
    pub fn token(&self) -> RequestToken {
        self.token
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

/// Result of an executed concept job.
#[derive(Debug, Clone)]
pub struct ConceptsCompletion {
    token: RequestToken,
    trigger: ConceptTrigger,
    result: Result<Vec<EventConcept>, GenerationError>,
}

impl ConceptsCompletion {
    pub fn token(&self) -> RequestToken {
        self.token
    }
}

/// Result of an executed vendor job.
#[derive(Debug, Clone)]
pub struct VendorsCompletion {
    token: RequestToken,
    trigger: VendorTrigger,
    result: Result<Vec<VendorCategory>, GenerationError>,
}

impl VendorsCompletion {
    pub fn token(&self) -> RequestToken {
        self.token
    }
}

/// How a completion affected the wizard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Fresh results replaced the collection.
    Applied,
    /// The request failed and canned data was substituted.
    FallbackApplied(WizardNotice),
    /// The request failed; the collection was left as it was.
    Failed(WizardNotice),
    /// The result arrived after its request was superseded or its step was
    /// left, and was dropped.
    Discarded,
    /// No request was needed.
    Skipped,
}

impl StepOutcome {
    /// The notice recorded on the state, if the request failed.
    pub fn notice(&self) -> Option<&WizardNotice> {
        match self {
            StepOutcome::FallbackApplied(notice) | StepOutcome::Failed(notice) => Some(notice),
            _ => None,
        }
    }
}

/// Coordinates the wizard state with the generation client.
pub struct WizardController {
    client: Arc<dyn GenerationClient>,
    concept_fallback: ConceptFallbackPolicy,
}

impl WizardController {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            client,
            concept_fallback: ConceptFallbackPolicy::default(),
        }
    }

    /// Sets what happens when the first concept request fails.
    pub fn with_concept_fallback(mut self, policy: ConceptFallbackPolicy) -> Self {
        self.concept_fallback = policy;
        self
    }

    pub fn concept_fallback(&self) -> ConceptFallbackPolicy {
        self.concept_fallback
    }

    // ─────────────────────────────────────────────────────────────────────
    // Concepts
    // ─────────────────────────────────────────────────────────────────────

    /// Registers a concept request and captures its inputs.
    pub fn begin_concepts(
        &self,
        state: &mut WizardState,
        trigger: ConceptTrigger,
    ) -> Result<ConceptsJob, WizardError> {
        let token = state.begin_request(Collection::Concepts)?;
        state.concepts_mut().set_error(None);

        let concepts = state.concepts();
        let feedback = match trigger {
            ConceptTrigger::Initial => None,
            ConceptTrigger::Feedback => {
                combine_concept_feedback(concepts.feedback_liked(), concepts.feedback_disliked())
            }
        };

        tracing::debug!(
            session_id = %state.session_id(),
            sequence = token.sequence(),
            ?trigger,
            has_feedback = feedback.is_some(),
            "Concept request started"
        );

        Ok(ConceptsJob {
            token,
            trigger,
            profile: state.profile().clone(),
            additional_ideas: concepts.additional_ideas().to_string(),
            feedback,
        })
    }

    /// Runs a concept job against the generation client.
    pub async fn execute_concepts(&self, job: ConceptsJob) -> ConceptsCompletion {
        let result = self
            .client
            .request_concepts(&job.profile, &job.additional_ideas, job.feedback.as_deref())
            .await;

        ConceptsCompletion {
            token: job.token,
            trigger: job.trigger,
            result,
        }
    }

    /// Folds a concept completion into the state.
    pub fn apply_concepts(
        &self,
        state: &mut WizardState,
        completion: ConceptsCompletion,
    ) -> StepOutcome {
        if !state.settle_request(completion.token) {
            tracing::warn!(
                session_id = %state.session_id(),
                sequence = completion.token.sequence(),
                "Discarding superseded concept result"
            );
            return StepOutcome::Discarded;
        }

        let policy = self.concept_fallback;
        let concepts = state.concepts_mut();

        match completion.result {
            Ok(batch) => {
                tracing::info!(count = batch.len(), "Concepts applied");
                concepts.replace_concepts(batch, false);
                concepts.set_error(None);
                match completion.trigger {
                    ConceptTrigger::Initial => concepts.hide_feedback_form(),
                    ConceptTrigger::Feedback => concepts.clear_feedback(),
                }
                StepOutcome::Applied
            }
            Err(error) => {
                let notice = error.to_notice();
                tracing::warn!(error = %error, "Concept generation failed");
                concepts.set_error(Some(notice.clone()));

                if concepts.has_concepts() {
                    return StepOutcome::Failed(notice);
                }
                match policy {
                    ConceptFallbackPolicy::SurfaceError => StepOutcome::Failed(notice),
                    ConceptFallbackPolicy::UseCannedConcepts => {
                        concepts.replace_concepts(fallback_concepts(), true);
                        StepOutcome::FallbackApplied(notice)
                    }
                }
            }
        }
    }

    /// Requests the first batch of concepts.
    pub async fn generate_concepts(
        &self,
        state: &mut WizardState,
    ) -> Result<StepOutcome, WizardError> {
        let job = self.begin_concepts(state, ConceptTrigger::Initial)?;
        let completion = self.execute_concepts(job).await;
        Ok(self.apply_concepts(state, completion))
    }

    /// Regenerates concepts with the liked/disliked feedback.
    pub async fn submit_concept_feedback(
        &self,
        state: &mut WizardState,
    ) -> Result<StepOutcome, WizardError> {
        let job = self.begin_concepts(state, ConceptTrigger::Feedback)?;
        let completion = self.execute_concepts(job).await;
        Ok(self.apply_concepts(state, completion))
    }

    // ─────────────────────────────────────────────────────────────────────
    // Vendors
    // ─────────────────────────────────────────────────────────────────────

    /// Registers a vendor request and captures its inputs.
    ///
    /// On [`VendorTrigger::Entry`] this returns `Ok(None)` when categories
    /// are already loaded or a request is outstanding.
    pub fn begin_vendors(
        &self,
        state: &mut WizardState,
        trigger: VendorTrigger,
    ) -> Result<Option<VendorsJob>, WizardError> {
        if trigger == VendorTrigger::Entry {
            if state.current_step() != WizardStep::Vendors {
                return Err(WizardError::wrong_step(WizardStep::Vendors, state.current_step()));
            }
            if state.vendors().has_categories() || state.is_in_flight(Collection::Vendors) {
                return Ok(None);
            }
        }

        let token = state.begin_request(Collection::Vendors)?;
        state.vendors_mut().set_error(None);

        let feedback = match trigger {
            VendorTrigger::Entry => None,
            VendorTrigger::Feedback => vendor_feedback(state.vendors().vendor_feedback()),
        };

        tracing::debug!(
            session_id = %state.session_id(),
            sequence = token.sequence(),
            ?trigger,
            has_feedback = feedback.is_some(),
            "Vendor request started"
        );

        Ok(Some(VendorsJob {
            token,
            trigger,
            profile: state.profile().clone(),
            feedback,
        }))
    }

    /// Runs a vendor job against the generation client.
    pub async fn execute_vendors(&self, job: VendorsJob) -> VendorsCompletion {
        let result = self
            .client
            .request_vendors(&job.profile, job.feedback.as_deref())
            .await;

        VendorsCompletion {
            token: job.token,
            trigger: job.trigger,
            result,
        }
    }

    /// Folds a vendor completion into the state.
    ///
    /// A failure with nothing loaded yet substitutes the canned categories.
    pub fn apply_vendors(&self, state: &mut WizardState, completion: VendorsCompletion) -> StepOutcome {
        if !state.settle_request(completion.token) {
            tracing::warn!(
                session_id = %state.session_id(),
                sequence = completion.token.sequence(),
                "Discarding superseded vendor result"
            );
            return StepOutcome::Discarded;
        }

        let vendors = state.vendors_mut();

        match completion.result {
            Ok(categories) => {
                tracing::info!(categories = categories.len(), "Vendors applied");
                vendors.replace_categories(categories, false);
                vendors.set_error(None);
                if completion.trigger == VendorTrigger::Feedback {
                    vendors.clear_feedback();
                }
                StepOutcome::Applied
            }
            Err(error) => {
                let notice = error.to_notice();
                tracing::warn!(error = %error, "Vendor generation failed");
                vendors.set_error(Some(notice.clone()));

                if vendors.has_categories() {
                    StepOutcome::Failed(notice)
                } else {
                    vendors.replace_categories(fallback_vendor_categories(), true);
                    StepOutcome::FallbackApplied(notice)
                }
            }
        }
    }

    /// Loads vendors on entering the vendor step, once.
    pub async fn enter_vendors(&self, state: &mut WizardState) -> Result<StepOutcome, WizardError> {
        match self.begin_vendors(state, VendorTrigger::Entry)? {
            Some(job) => {
                let completion = self.execute_vendors(job).await;
                Ok(self.apply_vendors(state, completion))
            }
            None => Ok(StepOutcome::Skipped),
        }
    }

    /// Regenerates vendors with the vendor feedback.
    pub async fn submit_vendor_feedback(
        &self,
        state: &mut WizardState,
    ) -> Result<StepOutcome, WizardError> {
        match self.begin_vendors(state, VendorTrigger::Feedback)? {
            Some(job) => {
                let completion = self.execute_vendors(job).await;
                Ok(self.apply_vendors(state, completion))
            }
            None => Ok(StepOutcome::Skipped),
        }
    }

    /// Advances one step and loads what the new step needs on entry.
    pub async fn advance_and_load(
        &self,
        state: &mut WizardState,
    ) -> Result<StepOutcome, WizardError> {
        match state.advance()? {
            WizardStep::Vendors => self.enter_vendors(state).await,
            _ => Ok(StepOutcome::Skipped),
        }
    }
}
