//! HTTP handlers for the relay endpoints.
//!
//! Each generation route forwards the JSON body unchanged to the upstream
//! service and normalizes failures into the error bodies the generation
//! client understands.

use std::time::Duration;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::Value;

use crate::adapters::generation::schema::{CONNECTION_FAILURE_PHRASE, UNAVAILABLE_STATUS};
use crate::config::RelayConfig;

use super::dto::{ErrorEnvelope, HealthResponse, UserQuery};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Relay failure that implements IntoResponse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The upstream could not be reached or reported a connection failure.
    Unavailable,
    /// The upstream answered with a non-success status.
    Upstream { status: u16, details: String },
    /// Any other transport or decode failure.
    Fetch {
        resource: &'static str,
        details: String,
    },
}

impl RelayError {
    fn status(&self) -> StatusCode {
        match self {
            RelayError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            RelayError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorEnvelope {
        match self {
            RelayError::Unavailable => ErrorEnvelope::connection_failed(),
            RelayError::Upstream { status, details } => {
                let reason = StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("");
                ErrorEnvelope {
                    error: Some(format!("API error: {} {}", status, reason).trim_end().to_string()),
                    message: None,
                    details: Some(details.clone()),
                }
            }
            RelayError::Fetch { resource, details } => ErrorEnvelope {
                error: Some(format!("Failed to fetch {}", resource)),
                message: None,
                details: Some(details.clone()),
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(self.body())).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state of the relay routes.
#[derive(Clone)]
pub struct RelayState {
    pub client: reqwest::Client,
    pub upstream_url: String,
}

impl RelayState {
    /// Creates the state with its own HTTP client.
    pub fn new(upstream_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            upstream_url: upstream_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Creates the state from the relay settings.
    pub fn from_config(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.upstream_url.clone(), config.timeout())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/concepts
pub async fn relay_concepts(
    State(state): State<RelayState>,
    Query(query): Query<UserQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, RelayError> {
    forward(&state, "concepts", query.user_id(), &body).await
}

/// POST /api/vendors
pub async fn relay_vendors(
    State(state): State<RelayState>,
    Query(query): Query<UserQuery>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, RelayError> {
    forward(&state, "vendors", query.user_id(), &body).await
}

/// GET /health
pub async fn health(State(state): State<RelayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        upstream: state.upstream_url.clone(),
    })
}

async fn forward(
    state: &RelayState,
    resource: &'static str,
    user_id: &str,
    body: &Value,
) -> Result<Json<Value>, RelayError> {
    let url = format!("{}/{}", state.upstream_url, resource);
    tracing::debug!(url = %url, user_id = %user_id, "Relaying generation request");

    let response = state
        .client
        .post(&url)
        .query(&[("user_id", user_id)])
        .json(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Upstream request failed");
            if e.is_connect() || e.is_timeout() {
                RelayError::Unavailable
            } else {
                RelayError::Fetch {
                    resource,
                    details: e.to_string(),
                }
            }
        })?;

    let status = response.status().as_u16();
    tracing::debug!(url = %url, status, "Upstream responded");

    if !response.status().is_success() {
        let text = response.text().await.unwrap_or_default();
        tracing::warn!(url = %url, status, body = %text, "Upstream rejected request");

        if text.contains(CONNECTION_FAILURE_PHRASE) || status == UNAVAILABLE_STATUS {
            return Err(RelayError::Unavailable);
        }
        return Err(RelayError::Upstream {
            status,
            details: text,
        });
    }

    let data = response.json::<Value>().await.map_err(|e| RelayError::Fetch {
        resource,
        details: e.to_string(),
    })?;
    Ok(Json(data))
}
