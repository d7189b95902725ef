//! HTTP handlers for webhook endpoints.
//!
//! These handlers connect Axum routes to the webhook command handler.

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::response::IntoResponse;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::handlers::webhook::{HandleWebhookCommand, HandleWebhookHandler};
use crate::domain::webhook::{DispatchOutcome, WebhookError};

use super::dto::{ErrorResponse, HealthResponse, WebhookAckResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the webhook endpoint.
///
/// Holds only read-only, startup-built components; cloned per request.
#[derive(Clone)]
pub struct WebhookAppState {
    pub webhook_handler: HandleWebhookHandler,
    pub signature_header: HeaderName,
}

impl WebhookAppState {
    pub fn new(webhook_handler: HandleWebhookHandler, signature_header: HeaderName) -> Self {
        Self {
            webhook_handler,
            signature_header,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /webhook/whop - Handle Whop webhook deliveries
///
/// The body is taken as raw bytes so the signature is checked against
/// exactly what was sent.
pub async fn receive_whop_webhook(
    State(state): State<WebhookAppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<WebhookAckResponse>), WebhookApiError> {
    let delivery_id = Uuid::new_v4();
    let span = tracing::info_span!("webhook_delivery", %delivery_id, body_len = body.len());

    async move {
        let signature = headers
            .get(&state.signature_header)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let cmd = HandleWebhookCommand {
            payload: body.to_vec(),
            signature,
        };

        let outcome = state.webhook_handler.handle(cmd).await?;
        tracing::info!(outcome = outcome.label(), "Webhook acknowledged");

        Ok((
            StatusCode::OK,
            Json(WebhookAckResponse::from_outcome(&outcome)),
        ))
    }
    .instrument(span)
    .await
}

/// GET /health - Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts webhook errors to HTTP responses.
#[derive(Debug)]
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> axum::response::Response {
        match self.0 {
            WebhookError::MalformedPayload(detail) => {
                let outcome = DispatchOutcome::Malformed(detail);
                (
                    StatusCode::OK,
                    Json(WebhookAckResponse::from_outcome(&outcome)),
                )
                    .into_response()
            }
            err => {
                let body = ErrorResponse::new(err.error_code(), err.public_message());
                (err.status_code(), Json(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_signature_mismatch_to_403() {
        let response = WebhookApiError(WebhookError::SignatureMismatch).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn api_error_maps_missing_secret_to_403() {
        let response = WebhookApiError(WebhookError::MissingSecret).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn api_error_maps_missing_signature_to_403() {
        let response = WebhookApiError(WebhookError::MissingSignature).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn api_error_acknowledges_malformed_payload() {
        let err = WebhookError::MalformedPayload("bad json".to_string());
        let response = WebhookApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "ok");
        assert!(chrono::DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}
