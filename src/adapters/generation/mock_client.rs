//! Mock Generation Client for testing.
//!
//! Provides a configurable implementation of the GenerationClient port so
//! the wizard can be exercised without a running generation service.
//!
//! # Features
//!
//! - Queued results per collection, consumed in order
//! - Simulated latency
//! - Call recording for verification
//!
//! # Example
//!
//! ```ignore
//! let client = MockGenerationClient::new()
//!     .with_concepts(vec![concept])
//!     .with_vendor_error(GenerationError::unavailable("down"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::event::{EventConcept, EventProfile, VendorCategory};
use crate::domain::wizard::{fallback_concepts, fallback_vendor_categories};
use crate::ports::{GenerationClient, GenerationError};

type ConceptResult = Result<Vec<EventConcept>, GenerationError>;
type VendorResult = Result<Vec<VendorCategory>, GenerationError>;

/// A request observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Concepts {
        profile: EventProfile,
        additional_ideas: String,
        feedback: Option<String>,
    },
    Vendors {
        profile: EventProfile,
        feedback: Option<String>,
    },
}

impl RecordedCall {
    /// Feedback text sent with the request.
    pub fn feedback(&self) -> Option<&str> {
        match self {
            RecordedCall::Concepts { feedback, .. } | RecordedCall::Vendors { feedback, .. } => {
                feedback.as_deref()
            }
        }
    }
}

/// Mock generation client.
///
/// When a queue runs dry the built-in sample data is returned.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationClient {
    concepts: Arc<Mutex<VecDeque<ConceptResult>>>,
    vendors: Arc<Mutex<VecDeque<VendorResult>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockGenerationClient {
    /// Creates a mock with empty queues and no latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful concept batch.
    pub fn with_concepts(self, concepts: Vec<EventConcept>) -> Self {
        lock(&self.concepts).push_back(Ok(concepts));
        self
    }

    /// Queues a failed concept request.
    pub fn with_concept_error(self, error: GenerationError) -> Self {
        lock(&self.concepts).push_back(Err(error));
        self
    }

    /// Queues a successful vendor response.
    pub fn with_vendors(self, categories: Vec<VendorCategory>) -> Self {
        lock(&self.vendors).push_back(Ok(categories));
        self
    }

    /// Queues a failed vendor request.
    pub fn with_vendor_error(self, error: GenerationError) -> Self {
        lock(&self.vendors).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of requests received.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Returns all recorded requests.
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn request_concepts(
        &self,
        profile: &EventProfile,
        additional_ideas: &str,
        feedback: Option<&str>,
    ) -> ConceptResult {
        lock(&self.calls).push(RecordedCall::Concepts {
            profile: profile.clone(),
            additional_ideas: additional_ideas.to_string(),
            feedback: feedback.map(str::to_string),
        });
        self.simulate_latency().await;

        lock(&self.concepts)
            .pop_front()
            .unwrap_or_else(|| Ok(fallback_concepts()))
    }

    async fn request_vendors(
        &self,
        profile: &EventProfile,
        feedback: Option<&str>,
    ) -> VendorResult {
        lock(&self.calls).push(RecordedCall::Vendors {
            profile: profile.clone(),
            feedback: feedback.map(str::to_string),
        });
        self.simulate_latency().await;

        lock(&self.vendors)
            .pop_front()
            .unwrap_or_else(|| Ok(fallback_vendor_categories()))
    }
}
