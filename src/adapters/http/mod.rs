//! HTTP adapters - REST API implementations.
//!
//! The webhook adapter owns the routes; this module wraps them with the
//! shared middleware stack.

pub mod webhook;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use webhook::{webhook_routes, WebhookAppState};

/// Build the application router with tracing, timeout and CORS layers.
pub fn app_router(state: WebhookAppState, server: &ServerConfig) -> Router {
    webhook_routes()
        .with_state(state)
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when the list is empty; otherwise only the parseable entries.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}
