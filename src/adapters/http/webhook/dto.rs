//! HTTP DTOs (Data Transfer Objects) for webhook endpoints.
//!
//! These types define the JSON bodies returned to the webhook sender.

use serde::{Deserialize, Serialize};

use crate::domain::webhook::DispatchOutcome;

/// Acknowledgment returned for every accepted delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookAckResponse {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Dispatch outcome label.
    pub outcome: String,
}

impl WebhookAckResponse {
    /// Acknowledgment for the given outcome. Error details are not exposed.
    pub fn from_outcome(outcome: &DispatchOutcome) -> Self {
        Self {
            status: "success".to_string(),
            message: "Webhook processed".to_string(),
            outcome: outcome.label().to_string(),
        }
    }
}

/// Error body returned on rejection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp of the check.
    pub timestamp: String,
}
