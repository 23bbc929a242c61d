//! HTTP routes for the relay endpoints.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{health, relay_concepts, relay_vendors, RelayState};

/// Creates the relay router with all routes.
pub fn relay_router(state: RelayState) -> Router {
    Router::new()
        // POST /api/concepts?user_id=...
        .route("/api/concepts", post(relay_concepts))
        // POST /api/vendors?user_id=...
        .route("/api/vendors", post(relay_vendors))
        .route("/health", get(health))
        .with_state(state)
}

/// CORS policy. An empty origin list allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin.trim()).ok())
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    fn router() -> Router {
        let state = RelayState::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
        relay_router(state)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_on_generation_route_is_rejected() {
        let response = router()
            .oneshot(Request::get("/api/concepts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn non_json_body_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/vendors")
            .body(Body::from("not json"))
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let app = router().layer(cors_layer(&["http://localhost:5173".to_string()]));
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/concepts")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("http://localhost:5173")
        );
    }
}
