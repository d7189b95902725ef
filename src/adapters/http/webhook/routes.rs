//! Axum router configuration for webhook endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{health_check, receive_whop_webhook, WebhookAppState};

/// Path the Whop dashboard is configured to deliver to.
pub const WHOP_WEBHOOK_PATH: &str = "/webhook/whop";

/// Create the webhook router.
///
/// # Routes
/// - `POST /webhook/whop` - Handle Whop webhooks (no auth, signature verified)
/// - `GET /health` - Liveness check
pub fn webhook_routes() -> Router<WebhookAppState> {
    Router::new()
        .route(WHOP_WEBHOOK_PATH, post(receive_whop_webhook))
        .route("/health", get(health_check))
}
