//! WebhookHandler port - Interface for per-kind webhook event handlers.
//!
//! Handlers are supplied by the surrounding application and registered
//! against an event kind at startup.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Handler for one kind of verified webhook event.
///
/// Implementations should be:
/// - **Idempotent** - The sender may redeliver the same event
/// - **Bounded** - Each invocation runs under an execution budget
/// - **Isolated** - A failure is logged and never rejects the delivery
///
/// # Example
///
/// ```ignore
/// struct GrantCourseAccess { /* ... */ }
///
/// #[async_trait]
/// impl WebhookHandler for GrantCourseAccess {
///     async fn handle(&self, data: &Value) -> Result<(), HandlerError> {
///         let member = data.get("user_id").ok_or(HandlerError::missing_field("user_id"))?;
///         // Grant access...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "GrantCourseAccess"
///     }
/// }
/// ```
#[async_trait]
pub trait WebhookHandler: Send + Sync {
    /// Process the event's data object.
    async fn handle(&self, data: &Value) -> Result<(), HandlerError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Errors returned by webhook handlers.
///
/// These never reach the sender; they are recorded against the dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// The event data lacks a field the handler needs.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A downstream dependency failed.
    #[error("Handler failed: {0}")]
    Failed(String),
}

impl HandlerError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}
