//! Failure notices surfaced to the user after a generation request fails.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable classification of a failed generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The generation service could not be reached.
    BackendUnavailable,
    /// The service was reached and rejected the request.
    BackendError,
    /// The service answered with a body of the wrong shape.
    MalformedResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FailureKind::BackendUnavailable => "BACKEND_UNAVAILABLE",
            FailureKind::BackendError => "BACKEND_ERROR",
            FailureKind::MalformedResponse => "MALFORMED_RESPONSE",
        };
        f.write_str(s)
    }
}

/// An inline message explaining a failure, paired with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardNotice {
    pub kind: FailureKind,
    pub message: String,
}

impl WizardNotice {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for WizardNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_displays_kind_and_message() {
        let notice = WizardNotice::new(FailureKind::BackendUnavailable, "Service is down");
        assert_eq!(notice.to_string(), "[BACKEND_UNAVAILABLE] Service is down");
    }
}
