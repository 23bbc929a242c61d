//! Generation Client Port - Interface to the external AI generation service.
//!
//! The wizard asks the service for two collections: event concepts and
//! vendor categories. Implementations translate between the domain types
//! and the service's wire schema and classify every failure into exactly
//! one [`GenerationError`] kind.
//!
//! # Contract
//!
//! - Single shot: implementations never retry. The caller decides whether
//!   to substitute fallback data.
//! - Every failure is recoverable at the wizard level.

use async_trait::async_trait;

use crate::domain::event::{EventConcept, EventProfile, VendorCategory};
use crate::domain::wizard::{FailureKind, WizardNotice};

/// Port for the concept and vendor generation service.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Requests a fresh batch of event concepts.
    ///
    /// `feedback` is the combined user feedback from the previous batch, if
    /// any.
    async fn request_concepts(
        &self,
        profile: &EventProfile,
        additional_ideas: &str,
        feedback: Option<&str>,
    ) -> Result<Vec<EventConcept>, GenerationError>;

    /// Requests a fresh set of vendor categories.
    async fn request_vendors(
        &self,
        profile: &EventProfile,
        feedback: Option<&str>,
    ) -> Result<Vec<VendorCategory>, GenerationError>;
}

const DEFAULT_UNAVAILABLE_MESSAGE: &str =
    "Unable to connect to the backend server. Please try again later.";

const MALFORMED_MESSAGE: &str =
    "The generation service returned an unexpected response. Please try again.";

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// The service (or the forwarding endpoint in front of it) cannot be
    /// reached.
    #[error("backend unavailable: {message}")]
    BackendUnavailable {
        /// Human-readable explanation.
        message: String,
    },

    /// The service was reached and rejected the request.
    #[error("backend error {status}: {details}")]
    BackendError {
        /// HTTP status returned by the forwarding endpoint.
        status: u16,
        /// Best available description of the rejection.
        details: String,
    },

    /// A success response whose body does not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Creates an unavailable error. An empty message is replaced with the
    /// default explanation.
    pub fn unavailable(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::BackendUnavailable {
            message: if message.trim().is_empty() {
                DEFAULT_UNAVAILABLE_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    /// Creates a backend error.
    pub fn backend(status: u16, details: impl Into<String>) -> Self {
        Self::BackendError {
            status,
            details: details.into(),
        }
    }

    /// Creates a malformed response error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }

    /// Machine-readable classification.
    pub fn kind(&self) -> FailureKind {
        match self {
            GenerationError::BackendUnavailable { .. } => FailureKind::BackendUnavailable,
            GenerationError::BackendError { .. } => FailureKind::BackendError,
            GenerationError::MalformedResponse(_) => FailureKind::MalformedResponse,
        }
    }

    /// Message suitable for showing inline next to the step.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::BackendUnavailable { message } => message.clone(),
            GenerationError::BackendError { status, details } => {
                if details.trim().is_empty() {
                    format!("API error: {}", status)
                } else {
                    details.clone()
                }
            }
            GenerationError::MalformedResponse(_) => MALFORMED_MESSAGE.to_string(),
        }
    }

    /// Converts the failure into the notice stored on the wizard state.
    pub fn to_notice(&self) -> WizardNotice {
        WizardNotice::new(self.kind(), self.user_message())
    }
}
