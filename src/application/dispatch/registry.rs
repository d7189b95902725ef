//! HandlerRegistry - Immutable mapping from event kind to handler.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::domain::webhook::WhopEventKind;
use crate::ports::WebhookHandler;

/// Table of webhook handlers keyed by event kind.
///
/// Built once at startup with [`HandlerRegistry::builder`]; there is no way to
/// add or remove handlers afterwards, so it can be shared without locking.
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn WebhookHandler>>,
}

impl HandlerRegistry {
    /// Start building a registry.
    pub fn builder() -> HandlerRegistryBuilder {
        HandlerRegistryBuilder::default()
    }

    /// Registry with no handlers; every kind is unhandled.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up the handler for a kind.
    pub fn get(&self, kind: &str) -> Option<&Arc<dyn WebhookHandler>> {
        self.handlers.get(kind)
    }

    /// Returns true if a handler is registered for the kind.
    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.kinds()
                    .into_iter()
                    .filter_map(|kind| self.handlers.get(kind).map(|h| (kind, h.name()))),
            )
            .finish()
    }
}

/// Builder for [`HandlerRegistry`].
#[derive(Default)]
pub struct HandlerRegistryBuilder {
    handlers: HashMap<String, Arc<dyn WebhookHandler>>,
}

impl HandlerRegistryBuilder {
    /// Register a handler for an arbitrary event kind.
    ///
    /// Registering the same kind twice keeps the last handler.
    pub fn register(mut self, kind: impl Into<String>, handler: Arc<dyn WebhookHandler>) -> Self {
        let kind = kind.into();
        if let Some(previous) = self.handlers.insert(kind.clone(), handler) {
            tracing::warn!(
                event_kind = %kind,
                replaced = previous.name(),
                "Webhook handler registered twice; keeping the latest"
            );
        }
        self
    }

    /// Register a handler for a known Whop event kind.
    pub fn on(self, kind: WhopEventKind, handler: Arc<dyn WebhookHandler>) -> Self {
        self.register(kind.as_str(), handler)
    }

    /// Freeze the registry.
    pub fn build(self) -> HandlerRegistry {
        HandlerRegistry {
            handlers: self.handlers,
        }
    }
}
