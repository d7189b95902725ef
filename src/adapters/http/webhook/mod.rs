//! HTTP adapter for webhook endpoints.
//!
//! Exposes the webhook receiver via REST API:
//! - `POST /webhook/whop` - Handle Whop webhooks
//! - `GET /health` - Liveness check

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, WebhookAckResponse};
pub use handlers::{health_check, receive_whop_webhook, WebhookApiError, WebhookAppState};
pub use routes::{webhook_routes, WHOP_WEBHOOK_PATH};
