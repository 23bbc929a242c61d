//! HTTP Generation Client - Implementation of GenerationClient over the
//! forwarding endpoint.
//!
//! Concepts are requested with `POST {base_url}/concepts` and vendors with
//! `POST {base_url}/vendors`, both tagged with a `user_id` query parameter.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpGenerationConfig::new("http://localhost:3000/api")
//!     .with_user_id("planner-42")
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = HttpGenerationClient::new(config)?;
//! ```
//!
//! # Failure classification
//!
//! | Condition                                       | Error                |
//! |-------------------------------------------------|----------------------|
//! | Request never produced a response               | `BackendUnavailable` |
//! | 503, or body reports a connection failure       | `BackendUnavailable` |
//! | Any other non-success status                    | `BackendError`       |
//! | Success whose body does not parse               | `MalformedResponse`  |

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::schema::{
    ErrorEnvelope, ExternalConcept, ExternalVendorGroup, CONNECTION_FAILURE_PHRASE,
    UNAVAILABLE_STATUS,
};
use super::transform::{
    concepts_payload, from_external_concepts, from_external_vendors, vendors_payload,
};
use crate::config::GenerationConfig;
use crate::domain::event::{EventConcept, EventProfile, VendorCategory};
use crate::ports::{GenerationClient, GenerationError};

/// User id sent when none is configured.
pub const DEFAULT_USER_ID: &str = "default-user";

/// Configuration for the HTTP generation client.
#[derive(Debug, Clone)]
pub struct HttpGenerationConfig {
    /// Base URL of the forwarding endpoint, without trailing slash.
    pub base_url: String,
    /// Value of the `user_id` query parameter.
    pub user_id: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl HttpGenerationConfig {
    /// Creates a configuration pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the user id.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&GenerationConfig> for HttpGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        let base = Self::new(config.base_url.clone()).with_timeout(config.timeout());
        match config.user_id.as_deref().map(str::trim) {
            Some(user_id) if !user_id.is_empty() => base.with_user_id(user_id),
            _ => base,
        }
    }
}

/// Generation client that talks JSON over HTTP.
pub struct HttpGenerationClient {
    config: HttpGenerationConfig,
    client: Client,
}

impl HttpGenerationClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: HttpGenerationConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &HttpGenerationConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path)
    }

    /// Posts `body` to `path` and decodes a successful response as `T`.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, GenerationError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, user_id = %self.config.user_id, "Sending generation request");

        let response = self
            .client
            .post(&url)
            .query(&[("user_id", self.config.user_id.as_str())])
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Generation request failed to send");
                if e.is_timeout() {
                    GenerationError::unavailable(format!(
                        "Request timed out after {} seconds",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    GenerationError::unavailable("")
                }
            })?;

        let response = Self::check_status(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::malformed(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Generation response did not match schema");
            GenerationError::malformed(format!("Failed to parse response: {}", e))
        })
    }

    /// Passes successful responses through and classifies the rest.
    async fn check_status(response: Response) -> Result<Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = classify_failure(status, &body);
        tracing::warn!(status = status.as_u16(), error = %error, "Generation request rejected");
        Err(error)
    }
}

/// Classifies a non-success response from the forwarding endpoint.
pub fn classify_failure(status: StatusCode, body: &str) -> GenerationError {
    let envelope: ErrorEnvelope = serde_json::from_str(body).unwrap_or_default();

    if status.as_u16() == UNAVAILABLE_STATUS
        || envelope.is_connection_failure()
        || body.to_lowercase().contains(CONNECTION_FAILURE_PHRASE)
    {
        return GenerationError::unavailable(envelope.message.unwrap_or_default());
    }

    let details = match envelope.best_description() {
        Some(description) => description.to_string(),
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => format!("API error: {}", status.as_u16()),
    };
    GenerationError::backend(status.as_u16(), details)
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn request_concepts(
        &self,
        profile: &EventProfile,
        additional_ideas: &str,
        feedback: Option<&str>,
    ) -> Result<Vec<EventConcept>, GenerationError> {
        let payload = concepts_payload(profile, additional_ideas, feedback);
        let concepts: Vec<ExternalConcept> = self.post_json("concepts", &payload).await?;

        tracing::info!(count = concepts.len(), "Received concepts");
        Ok(from_external_concepts(concepts))
    }

    async fn request_vendors(
        &self,
        profile: &EventProfile,
        feedback: Option<&str>,
    ) -> Result<Vec<VendorCategory>, GenerationError> {
        let payload = vendors_payload(profile, feedback);
        let groups: Vec<ExternalVendorGroup> = self.post_json("vendors", &payload).await?;

        tracing::info!(groups = groups.len(), "Received vendor groups");
        Ok(from_external_vendors(groups))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = HttpGenerationConfig::new("http://localhost:3000/api/");
        assert_eq!(config.base_url, "http://localhost:3000/api");
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn config_builder_pattern() {
        let config = HttpGenerationConfig::new("http://x")
            .with_user_id("u-1")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.user_id, "u-1");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn config_from_settings_ignores_blank_user_id() {
        let settings = GenerationConfig {
            base_url: "http://api.test".to_string(),
            user_id: Some("  ".to_string()),
            timeout_secs: 9,
        };
        let config = HttpGenerationConfig::from(&settings);

        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.timeout, Duration::from_secs(9));
    }

    #[test]
    fn endpoint_joins_path() {
        let client =
            HttpGenerationClient::new(HttpGenerationConfig::new("http://api.test/api")).unwrap();
        assert_eq!(client.endpoint("vendors"), "http://api.test/api/vendors");
    }

    #[test]
    fn service_unavailable_is_unavailable() {
        let body = r#"{"error":"Backend server connection failed","message":"Unable to connect to the backend server. Please try again later.","details":"The API server may be temporarily unavailable"}"#;
        let error = classify_failure(StatusCode::SERVICE_UNAVAILABLE, body);

        assert_eq!(
            error,
            GenerationError::unavailable(
                "Unable to connect to the backend server. Please try again later."
            )
        );
    }

    #[test]
    fn connection_phrase_in_500_is_unavailable() {
        let error = classify_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "upstream: Failed to establish a connection to host",
        );
        assert!(matches!(error, GenerationError::BackendUnavailable { .. }));
    }

    #[test]
    fn rejection_uses_error_field() {
        let body = r#"{"error":"API error: 422 Unprocessable Entity","details":"max_budget must be >= min_budget"}"#;
        let error = classify_failure(StatusCode::UNPROCESSABLE_ENTITY, body);

        assert_eq!(
            error,
            GenerationError::backend(422, "API error: 422 Unprocessable Entity")
        );
    }

    #[test]
    fn rejection_with_plain_body_uses_body() {
        let error = classify_failure(StatusCode::BAD_REQUEST, "bad things");
        assert_eq!(error, GenerationError::backend(400, "bad things"));
    }

    #[test]
    fn rejection_without_body_uses_status() {
        let error = classify_failure(StatusCode::NOT_FOUND, "");
        assert_eq!(error, GenerationError::backend(404, "API error: 404"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = HttpGenerationClient::new(
            HttpGenerationConfig::new(format!("http://{}/api", addr))
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let result = client
            .request_vendors(&EventProfile::default(), None)
            .await;

        assert!(matches!(
            result,
            Err(GenerationError::BackendUnavailable { .. })
        ));
    }
}
