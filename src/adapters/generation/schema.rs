//! Wire types of the external generation service.
//!
//! Every field the service's schema validation expects is listed
//! explicitly. Optional values are serialized as JSON `null`, never omitted.

use serde::{Deserialize, Serialize};

/// Body text the upstream uses when it cannot open a connection.
pub const CONNECTION_FAILURE_PHRASE: &str = "failed to establish a connection";

/// `error` value the forwarding endpoint reports for connectivity failures.
pub const CONNECTION_FAILED_ERROR: &str = "Backend server connection failed";

/// Status code the forwarding endpoint uses for connectivity failures.
pub const UNAVAILABLE_STATUS: u16 = 503;

/// Event profile as the generation service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEventProfile {
    pub description: String,
    pub min_budget: u32,
    pub max_budget: u32,
    pub min_guests: u32,
    pub max_guests: u32,
    /// `YYYY-MM-DDTHH:MM:00`, or empty when no date was chosen.
    pub event_datetime: String,
    pub must_haves: Vec<String>,
    pub nice_to_haves: Vec<String>,
    pub things_to_avoid: Vec<String>,
    pub special_needs: String,
    pub restrictions: String,
    /// Reserved by the service; always `null`.
    pub concept: Option<String>,
}

/// Body of a concept generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptsPayload {
    pub event_ideas: String,
    pub event_profile: ExternalEventProfile,
    pub user_feedback: Option<String>,
}

/// Body of a vendor generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorsPayload {
    pub event_profile: ExternalEventProfile,
    pub user_feedback: Option<String>,
}

/// One concept in a concept generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalConcept {
    pub name: String,
    pub description: String,
}

/// One named offering inside a vendor group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorIdea {
    pub name: String,
    pub explanation: String,
}

/// One entry of a vendor generation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalVendorGroup {
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub ideas: Vec<VendorIdea>,
}

/// Error body returned by the forwarding endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorEnvelope {
    /// The body sent when the upstream service cannot be reached.
    pub fn connection_failed() -> Self {
        Self {
            error: Some(CONNECTION_FAILED_ERROR.to_string()),
            message: Some(
                "Unable to connect to the backend server. Please try again later.".to_string(),
            ),
            details: Some("The API server may be temporarily unavailable".to_string()),
        }
    }

    /// Returns true if this body reports a connectivity failure.
    pub fn is_connection_failure(&self) -> bool {
        self.error.as_deref() == Some(CONNECTION_FAILED_ERROR)
    }

    /// First non-empty of `message`, `error`, `details`.
    pub fn best_description(&self) -> Option<&str> {
        [&self.message, &self.error, &self.details]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_feedback_serializes_as_null_when_absent() {
        let payload = VendorsPayload {
            event_profile: ExternalEventProfile {
                description: String::new(),
                min_budget: 0,
                max_budget: 5000,
                min_guests: 0,
                max_guests: 100,
                event_datetime: String::new(),
                must_haves: vec![],
                nice_to_haves: vec![],
                things_to_avoid: vec![],
                special_needs: String::new(),
                restrictions: String::new(),
                concept: None,
            },
            user_feedback: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["user_feedback"], json!(null));
        assert_eq!(value["event_profile"]["concept"], json!(null));
    }

    #[test]
    fn vendor_group_tolerates_missing_description() {
        let group: ExternalVendorGroup = serde_json::from_value(json!({
            "category": "Venue",
            "ideas": [{"name": "Loft", "explanation": "Spacious"}]
        }))
        .unwrap();

        assert_eq!(group.description, "");
        assert_eq!(group.ideas.len(), 1);
    }

    #[test]
    fn connection_failed_envelope_is_recognized() {
        let envelope = ErrorEnvelope::connection_failed();
        assert!(envelope.is_connection_failure());

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"], "Backend server connection failed");
    }

    #[test]
    fn best_description_prefers_message_then_error_then_details() {
        let envelope = ErrorEnvelope {
            error: Some("API error: 422".to_string()),
            message: None,
            details: Some("raw".to_string()),
        };
        assert_eq!(envelope.best_description(), Some("API error: 422"));

        let envelope = ErrorEnvelope {
            error: Some("".to_string()),
            message: Some("  ".to_string()),
            details: Some("raw".to_string()),
        };
        assert_eq!(envelope.best_description(), Some("raw"));

        assert_eq!(ErrorEnvelope::default().best_description(), None);
    }

    #[test]
    fn absent_envelope_fields_are_not_serialized() {
        let envelope = ErrorEnvelope {
            error: Some("x".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({"error": "x"}));
    }
}
