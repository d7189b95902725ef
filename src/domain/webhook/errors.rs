//! Webhook error types.
//!
//! Only authentication failures turn into a non-success response; everything
//! after a successful verification is acknowledged to the sender.

use axum::http::StatusCode;
use thiserror::Error;

/// Errors that occur while authenticating or interpreting a webhook delivery.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// No signing secret is configured, so nothing can be authenticated.
    #[error("Webhook secret not configured")]
    MissingSecret,

    /// The request carried no signature header.
    #[error("Missing signature")]
    MissingSignature,

    /// The supplied signature does not match the body.
    #[error("Invalid signature")]
    SignatureMismatch,

    /// The body was authentic but could not be interpreted as an event.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl WebhookError {
    /// Returns true for failures that reject the delivery.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            WebhookError::MissingSecret
                | WebhookError::MissingSignature
                | WebhookError::SignatureMismatch
        )
    }

    /// Maps the error to the HTTP status returned to the sender.
    ///
    /// A missing secret answers exactly like a bad signature so callers cannot
    /// probe configuration state.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MissingSecret
            | WebhookError::MissingSignature
            | WebhookError::SignatureMismatch => StatusCode::FORBIDDEN,

            // Authentic delivery; redelivery would not fix it
            WebhookError::MalformedPayload(_) => StatusCode::OK,
        }
    }

    /// Error code exposed to the sender.
    pub fn error_code(&self) -> &'static str {
        match self {
            WebhookError::MissingSecret
            | WebhookError::MissingSignature
            | WebhookError::SignatureMismatch => "INVALID_SIGNATURE",
            WebhookError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
        }
    }

    /// Message exposed to the sender.
    pub fn public_message(&self) -> &'static str {
        match self {
            WebhookError::MalformedPayload(_) => "Malformed payload",
            _ => "Invalid signature",
        }
    }
}
