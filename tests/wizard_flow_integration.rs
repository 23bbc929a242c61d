//! Integration tests for the wizard flow.
//!
//! Drives `WizardState` through `WizardController` with the scripted
//! `MockGenerationClient`:
//! 1. The happy path from profile to vendor feedback
//! 2. Recovery when the generation service fails
//! 3. Late results that arrive after the user moved on

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use event_planner::adapters::generation::{MockGenerationClient, RecordedCall};
use event_planner::application::wizard::{ConceptTrigger, StepOutcome, WizardController};
use event_planner::domain::event::{EventConcept, Vendor, VendorCategory};
use event_planner::domain::foundation::{CategoryId, ConceptId, VendorId};
use event_planner::domain::wizard::{
    fallback_vendor_categories, Collection, ConceptFallbackPolicy, FailureKind, WizardError,
    WizardState, WizardStep,
};
use event_planner::ports::GenerationError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn concept(id: &str, title: &str) -> EventConcept {
    EventConcept::new(ConceptId::new(id), title, format!("{} description", title))
}

fn category(name: &str, vendors: &[&str]) -> VendorCategory {
    VendorCategory {
        id: CategoryId::new(format!("category-{}", name)),
        name: name.to_string(),
        vendors: vendors
            .iter()
            .map(|vendor| Vendor {
                id: VendorId::new(format!("vendor-{}", vendor)),
                name: vendor.to_string(),
                vendor_type: vendor.to_string(),
                reasoning: format!("{} fits the event", vendor),
            })
            .collect(),
    }
}

fn fill_profile(state: &mut WizardState) {
    let profile = state.profile_mut().unwrap();
    profile.overview = "Anniversary dinner".to_string();
    profile.set_budget(1000, 3000).unwrap();
    profile.set_guests(30, 60).unwrap();
    profile.event_date = NaiveDate::from_ymd_opt(2025, 9, 20);
    profile.set_event_times("19:00", "23:00").unwrap();
    profile.dietary_restrictions = "Vegetarian options".to_string();
}

async fn ready_for_vendors(controller: &WizardController, state: &mut WizardState) {
    controller.advance_and_load(state).await.unwrap();
    controller.generate_concepts(state).await.unwrap();
    let choice = state.concepts().choices()[0].clone();
    state.select_concept(&choice).unwrap();
}

// =============================================================================
// Happy path
// =============================================================================

#[tokio::test]
async fn complete_wizard_flow() {
    let mock = MockGenerationClient::new()
        .with_concepts(vec![concept("c1", "Candlelit Loft"), concept("c2", "Vineyard")])
        .with_concepts(vec![concept("c3", "Lakeside Terrace")])
        .with_vendors(vec![category("Venue", &["Loft A"]), category("Music", &["Trio"])])
        .with_vendors(vec![category("Venue", &["Terrace B"])]);
    let controller = WizardController::new(Arc::new(mock.clone()));
    let mut state = WizardState::new();

    // Step 1: profile
    assert_eq!(state.current_step(), WizardStep::Profile);
    fill_profile(&mut state);
    assert_eq!(
        controller.advance_and_load(&mut state).await.unwrap(),
        StepOutcome::Skipped
    );
    assert!(state.profile_mut().is_err());

    // Step 2: concepts
    state.set_additional_ideas("string quartet").unwrap();
    assert_eq!(
        controller.generate_concepts(&mut state).await.unwrap(),
        StepOutcome::Applied
    );
    assert!(!state.can_advance());

    state.set_feedback_form_visible(true).unwrap();
    state.set_concept_feedback("", "more outdoors").unwrap();
    assert_eq!(
        controller.submit_concept_feedback(&mut state).await.unwrap(),
        StepOutcome::Applied
    );
    assert_eq!(state.concepts().concepts()[0].title(), "Lakeside Terrace");
    assert!(!state.concepts().show_feedback_form());

    let choice = state.concepts().choices()[0].clone();
    state.select_concept(&choice).unwrap();
    assert_eq!(
        state.concepts().selected_concept().unwrap().title(),
        "Lakeside Terrace"
    );

    // Step 3: vendors
    assert_eq!(
        controller.advance_and_load(&mut state).await.unwrap(),
        StepOutcome::Applied
    );
    assert_eq!(state.current_step(), WizardStep::Vendors);
    assert_eq!(state.vendors().categories().len(), 2);

    state.set_vendor_feedback("Need a bigger venue").unwrap();
    assert_eq!(
        controller.submit_vendor_feedback(&mut state).await.unwrap(),
        StepOutcome::Applied
    );
    assert_eq!(state.vendors().categories()[0].vendors[0].name, "Terrace B");
    assert_eq!(state.vendors().vendor_feedback(), "");

    let calls = mock.calls();
    assert_eq!(calls.len(), 4);
    assert_eq!(calls[1].feedback(), Some("What I'd like to change: more outdoors"));
    assert_eq!(calls[3].feedback(), Some("Need a bigger venue"));
    match &calls[0] {
        RecordedCall::Concepts {
            profile,
            additional_ideas,
            ..
        } => {
            assert_eq!(profile.overview, "Anniversary dinner");
            assert_eq!(profile.budget().max(), 3000);
            assert_eq!(additional_ideas, "string quartet");
        }
        other => panic!("expected a concept call, got {:?}", other),
    }

    assert!(matches!(state.advance(), Err(WizardError::FinalStep(_))));
}

#[tokio::test]
async fn vendors_step_requires_selection() {
    let mock = MockGenerationClient::new();
    let controller = WizardController::new(Arc::new(mock.clone()));
    let mut state = WizardState::new();
    controller.advance_and_load(&mut state).await.unwrap();
    controller.generate_concepts(&mut state).await.unwrap();

    let result = controller.advance_and_load(&mut state).await;

    assert_eq!(result.unwrap_err(), WizardError::SelectionRequired);
    assert_eq!(state.current_step(), WizardStep::Concepts);
    assert!(mock.calls().iter().all(|c| matches!(c, RecordedCall::Concepts { .. })));
}

// =============================================================================
// Recovery
// =============================================================================

#[tokio::test]
async fn vendor_outage_falls_back_to_canned_categories() {
    let mock = MockGenerationClient::new().with_vendor_error(GenerationError::unavailable(
        "Unable to connect to the backend server. Please try again later.",
    ));
    let controller = WizardController::new(Arc::new(mock));
    let mut state = WizardState::new();
    ready_for_vendors(&controller, &mut state).await;

    let outcome = controller.advance_and_load(&mut state).await.unwrap();

    assert!(matches!(outcome, StepOutcome::FallbackApplied(_)));
    assert_eq!(
        state.vendors().categories(),
        fallback_vendor_categories().as_slice()
    );
    let error = state.vendors().error().unwrap();
    assert_eq!(error.kind, FailureKind::BackendUnavailable);
    assert!(!error.message.is_empty());

    // a later successful feedback round replaces the placeholder data
    assert!(state.vendors().is_placeholder());
    controller.submit_vendor_feedback(&mut state).await.unwrap();
    assert!(!state.vendors().is_placeholder());
    assert!(state.vendors().error().is_none());
}

#[tokio::test]
async fn concept_outage_honors_fallback_policy() {
    let failing = || {
        MockGenerationClient::new()
            .with_concept_error(GenerationError::backend(500, "Internal Server Error"))
    };

    let surface = WizardController::new(Arc::new(failing()));
    let mut state = WizardState::new();
    state.advance().unwrap();
    surface.generate_concepts(&mut state).await.unwrap();
    assert!(state.concepts().concepts().is_empty());
    assert_eq!(
        state.concepts().error().unwrap().kind,
        FailureKind::BackendError
    );

    let canned = WizardController::new(Arc::new(failing()))
        .with_concept_fallback(ConceptFallbackPolicy::UseCannedConcepts);
    let mut state = WizardState::new();
    state.advance().unwrap();
    canned.generate_concepts(&mut state).await.unwrap();
    assert_eq!(state.concepts().concepts().len(), 5);
    assert!(state.concepts().error().is_some());

    // canned concepts are selectable
    let choice = state.concepts().choices()[2].clone();
    state.select_concept(&choice).unwrap();
    assert!(state.can_advance());
}

// =============================================================================
// Late arrivals
// =============================================================================

#[tokio::test]
async fn regeneration_finishing_after_advance_is_discarded() {
    let mock = MockGenerationClient::new()
        .with_concepts(vec![concept("c1", "First")])
        .with_concepts(vec![concept("c2", "Second")]);
    let controller = WizardController::new(Arc::new(mock));
    let mut state = WizardState::new();
    state.advance().unwrap();
    controller.generate_concepts(&mut state).await.unwrap();
    let choice = state.concepts().choices()[0].clone();
    state.select_concept(&choice).unwrap();

    let job = controller
        .begin_concepts(&mut state, ConceptTrigger::Feedback)
        .unwrap();
    state.advance().unwrap();
    let completion = controller.execute_concepts(job).await;

    assert_eq!(
        controller.apply_concepts(&mut state, completion),
        StepOutcome::Discarded
    );
    assert_eq!(state.concepts().concepts()[0].title(), "First");
    assert_eq!(
        state.concepts().selected_concept_id().map(|id| id.as_str()),
        Some("c1")
    );
}

#[tokio::test]
async fn request_runs_without_holding_state() {
    let mock = MockGenerationClient::new()
        .with_concepts(vec![concept("c1", "Slow batch")])
        .with_delay(Duration::from_millis(20));
    let controller = Arc::new(WizardController::new(Arc::new(mock)));
    let mut state = WizardState::new();
    state.advance().unwrap();

    let job = controller
        .begin_concepts(&mut state, ConceptTrigger::Initial)
        .unwrap();
    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.execute_concepts(job).await })
    };

    // the state stays interactive while the request runs
    state.set_additional_ideas("edited meanwhile").unwrap();
    assert!(state.is_in_flight(Collection::Concepts));
    assert_eq!(
        controller
            .begin_concepts(&mut state, ConceptTrigger::Initial)
            .unwrap_err(),
        WizardError::RequestInFlight(Collection::Concepts)
    );

    let completion = task.await.unwrap();
    assert_eq!(
        controller.apply_concepts(&mut state, completion),
        StepOutcome::Applied
    );
    assert_eq!(state.concepts().concepts()[0].title(), "Slow batch");
    assert!(!state.is_in_flight(Collection::Concepts));
}

#[tokio::test]
async fn completion_applies_only_once() {
    let mock = MockGenerationClient::new();
    let controller = WizardController::new(Arc::new(mock));
    let mut state = WizardState::new();
    state.advance().unwrap();

    let job = controller
        .begin_concepts(&mut state, ConceptTrigger::Initial)
        .unwrap();
    let completion = controller.execute_concepts(job).await;
    let duplicate = completion.clone();

    assert_eq!(
        controller.apply_concepts(&mut state, completion),
        StepOutcome::Applied
    );
    assert_eq!(
        controller.apply_concepts(&mut state, duplicate),
        StepOutcome::Discarded
    );
}
