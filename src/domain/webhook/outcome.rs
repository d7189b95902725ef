//! Dispatch outcome for one delivery.

/// Result of dispatching a verified delivery.
///
/// Every variant is acknowledged to the sender with `200 OK`; rejection is
/// represented by [`WebhookError`](super::WebhookError) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The registered handler completed successfully.
    Handled,
    /// The registered handler failed; the detail is for operators only.
    HandledWithError(String),
    /// No handler is registered for this kind.
    Unhandled(String),
    /// The body was authentic but not a recognizable event.
    Malformed(String),
    /// The handler exceeded its execution budget.
    TimedOut,
    /// The handler was started on a background task.
    Accepted,
}

impl DispatchOutcome {
    /// Short label included in the acknowledgment body.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Handled => "handled",
            Self::HandledWithError(_) => "handled_with_error",
            Self::Unhandled(_) | Self::Malformed(_) => "unhandled",
            Self::TimedOut => "timed_out",
            Self::Accepted => "accepted",
        }
    }

    /// Returns true if a registered handler ran to completion without error.
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled)
    }
}
