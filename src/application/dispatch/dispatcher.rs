//! EventDispatcher - Routes verified events to their registered handler.
//!
//! ## Policy
//!
//! 1. Unregistered kinds are logged and reported as `Unhandled`
//! 2. Handlers run on their own task under an execution budget
//! 3. Handler errors, panics and timeouts are recorded in the outcome and
//!    never fail the delivery

use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::task::JoinError;
use tracing::Instrument;

use crate::domain::webhook::{DispatchOutcome, VerifiedEvent};
use crate::ports::WebhookHandler;

use super::registry::HandlerRegistry;

/// Default execution budget for a single handler invocation.
pub const DEFAULT_HANDLER_TIMEOUT: Duration = Duration::from_secs(10);

/// How the dispatcher waits for handlers.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Wait for the handler task (bounded by the budget) before acknowledging.
    #[default]
    Inline,
    /// Acknowledge as soon as the handler task is started.
    Background,
}

/// Dispatches verified events using a fixed handler registry.
#[derive(Debug, Clone)]
pub struct EventDispatcher {
    registry: Arc<HandlerRegistry>,
    handler_timeout: Duration,
    mode: DispatchMode,
}

impl EventDispatcher {
    /// Creates a dispatcher with the default budget in inline mode.
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self {
            registry,
            handler_timeout: DEFAULT_HANDLER_TIMEOUT,
            mode: DispatchMode::default(),
        }
    }

    /// Set the per-handler execution budget.
    pub fn with_handler_timeout(mut self, timeout: Duration) -> Self {
        self.handler_timeout = timeout;
        self
    }

    /// Set the dispatch mode.
    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    pub fn mode(&self) -> DispatchMode {
        self.mode
    }

    /// Dispatch a verified event to its handler.
    ///
    /// # Returns
    ///
    /// - `Unhandled(kind)` - No handler registered for the kind
    /// - `Handled` - Handler succeeded
    /// - `HandledWithError(detail)` - Handler returned an error or panicked
    /// - `TimedOut` - Handler exceeded its budget
    /// - `Accepted` - Background mode; the handler task was started
    pub async fn dispatch(&self, event: VerifiedEvent) -> DispatchOutcome {
        let Some(handler) = self.registry.get(event.kind()).cloned() else {
            tracing::info!(
                event_kind = %event.kind(),
                "No handler registered for webhook event kind"
            );
            return DispatchOutcome::Unhandled(event.kind().to_string());
        };

        let kind = event.kind().to_string();
        let task = tokio::spawn(
            run_handler(handler, event, self.handler_timeout).in_current_span(),
        );

        match self.mode {
            DispatchMode::Inline => join_outcome(&kind, task.await),
            DispatchMode::Background => {
                tokio::spawn(
                    async move {
                        let outcome = join_outcome(&kind, task.await);
                        tracing::debug!(
                            event_kind = %kind,
                            outcome = outcome.label(),
                            "Background webhook dispatch finished"
                        );
                    }
                    .in_current_span(),
                );
                DispatchOutcome::Accepted
            }
        }
    }
}

async fn run_handler(
    handler: Arc<dyn WebhookHandler>,
    event: VerifiedEvent,
    budget: Duration,
) -> DispatchOutcome {
    let (kind, data) = event.into_parts();

    match tokio::time::timeout(budget, handler.handle(&data)).await {
        Ok(Ok(())) => {
            tracing::info!(
                event_kind = %kind,
                handler = handler.name(),
                "Webhook event handled"
            );
            DispatchOutcome::Handled
        }
        Ok(Err(err)) => {
            tracing::error!(
                event_kind = %kind,
                handler = handler.name(),
                error = %err,
                "Webhook handler failed"
            );
            DispatchOutcome::HandledWithError(err.to_string())
        }
        Err(_) => {
            tracing::warn!(
                event_kind = %kind,
                handler = handler.name(),
                budget_ms = budget.as_millis() as u64,
                "Webhook handler exceeded its execution budget"
            );
            DispatchOutcome::TimedOut
        }
    }
}

fn join_outcome(kind: &str, joined: Result<DispatchOutcome, JoinError>) -> DispatchOutcome {
    match joined {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(
                event_kind = %kind,
                error = %err,
                "Webhook handler task aborted"
            );
            DispatchOutcome::HandledWithError(format!("handler task aborted: {}", err))
        }
    }
}
