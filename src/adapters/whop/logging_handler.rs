//! Logging implementation of WebhookHandler.
//!
//! Records the event data and succeeds. Registered for every known Whop
//! event kind until real handlers replace it.
//!
//! # Usage
//!
//! ```ignore
//! use whop_webhooks::adapters::whop::{default_registry, LoggingHandler};
//!
//! let registry = default_registry();
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dispatch::HandlerRegistry;
use crate::domain::webhook::WhopEventKind;
use crate::ports::{HandlerError, WebhookHandler};

/// Handler that logs the event data for one known kind.
#[derive(Debug, Clone, Copy)]
pub struct LoggingHandler {
    kind: WhopEventKind,
}

impl LoggingHandler {
    pub fn new(kind: WhopEventKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> WhopEventKind {
        self.kind
    }

    fn summary(&self) -> &'static str {
        match self.kind {
            WhopEventKind::PurchaseCreated => "New purchase",
            WhopEventKind::MembershipStarted => "Membership started",
            WhopEventKind::MembershipCancelled => "Membership cancelled",
            WhopEventKind::AccessRevoked => "Access revoked",
        }
    }
}

#[async_trait]
impl WebhookHandler for LoggingHandler {
    async fn handle(&self, data: &Value) -> Result<(), HandlerError> {
        tracing::info!(event_kind = %self.kind, data = %data, "{}", self.summary());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LoggingHandler"
    }
}

/// Registry with a [`LoggingHandler`] for every known Whop event kind.
pub fn default_registry() -> HandlerRegistry {
    WhopEventKind::ALL
        .into_iter()
        .fold(HandlerRegistry::builder(), |builder, kind| {
            builder.on(kind, Arc::new(LoggingHandler::new(kind)))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn logging_handler_always_succeeds() {
        let handler = LoggingHandler::new(WhopEventKind::PurchaseCreated);

        let result = handler.handle(&serde_json::json!({"id": 1})).await;

        assert!(result.is_ok());
    }

    #[test]
    fn default_registry_covers_all_known_kinds() {
        let registry = default_registry();

        assert_eq!(registry.len(), WhopEventKind::ALL.len());
        for kind in WhopEventKind::ALL {
            assert!(registry.contains(kind.as_str()), "missing {}", kind);
        }
    }

    #[test]
    fn default_registry_ignores_unknown_kinds() {
        assert!(!default_registry().contains("new.unseen.kind"));
    }
}
