//! HandleWebhookHandler - Command handler for inbound Whop deliveries.
//!
//! Runs one delivery through verification and dispatch:
//! `Received -> Verifying -> {Rejected | Verified} -> Dispatching -> Acknowledged`.

use std::sync::Arc;

use crate::application::dispatch::EventDispatcher;
use crate::domain::webhook::{DispatchOutcome, InboundEnvelope, SignatureVerifier, WebhookError};

/// Command to handle one webhook delivery.
#[derive(Debug, Clone)]
pub struct HandleWebhookCommand {
    /// Raw request body, exactly as received.
    pub payload: Vec<u8>,
    /// Signature header value, if present.
    pub signature: Option<String>,
}

/// Handler for processing Whop webhook deliveries.
///
/// Only authentication failures are returned as errors. A delivery that
/// verifies is always acknowledged, whatever its dispatch outcome.
#[derive(Clone)]
pub struct HandleWebhookHandler {
    verifier: Arc<SignatureVerifier>,
    dispatcher: Arc<EventDispatcher>,
}

impl HandleWebhookHandler {
    pub fn new(verifier: Arc<SignatureVerifier>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            verifier,
            dispatcher,
        }
    }

    pub async fn handle(&self, cmd: HandleWebhookCommand) -> Result<DispatchOutcome, WebhookError> {
        // 1. Verify signature over the raw bytes
        let envelope = InboundEnvelope::new(cmd.payload, cmd.signature);
        let verified = self.verifier.verify_envelope(envelope)?;

        // 2. Interpret the authenticated body
        let event = match verified.into_event() {
            Ok(event) => event,
            Err(WebhookError::MalformedPayload(detail)) => {
                tracing::warn!(detail = %detail, "Authentic webhook with malformed payload");
                return Ok(DispatchOutcome::Malformed(detail));
            }
            Err(other) => return Err(other),
        };
        tracing::debug!(event_kind = %event.kind(), data = %event.data(), "Webhook received");

        // 3. Dispatch
        Ok(self.dispatcher.dispatch(event).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dispatch::HandlerRegistry;
    use crate::domain::webhook::{sign_payload, WebhookSecret};
    use crate::ports::{HandlerError, WebhookHandler};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicU32, Ordering};

    const SECRET: &str = "s3cr3t";
    const PURCHASE_BODY: &str = r#"{"type":"purchase.created","data":{"id":1}}"#;

    struct CountingHandler {
        calls: AtomicU32,
    }

    #[async_trait]
    impl WebhookHandler for CountingHandler {
        async fn handle(&self, _data: &Value) -> Result<(), HandlerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    fn handler_with(secret: WebhookSecret) -> (HandleWebhookHandler, Arc<CountingHandler>) {
        let counting = Arc::new(CountingHandler {
            calls: AtomicU32::new(0),
        });
        let registry = HandlerRegistry::builder()
            .register("purchase.created", counting.clone())
            .build();
        let handler = HandleWebhookHandler::new(
            Arc::new(SignatureVerifier::new(secret)),
            Arc::new(EventDispatcher::new(Arc::new(registry))),
        );
        (handler, counting)
    }

    fn signed(body: &str) -> HandleWebhookCommand {
        HandleWebhookCommand {
            payload: body.as_bytes().to_vec(),
            signature: Some(sign_payload(&WebhookSecret::new(SECRET), body.as_bytes())),
        }
    }

    #[tokio::test]
    async fn signed_purchase_is_handled() {
        let (handler, counting) = handler_with(WebhookSecret::new(SECRET));

        let outcome = handler.handle(signed(PURCHASE_BODY)).await.unwrap();

        assert_eq!(outcome, DispatchOutcome::Handled);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_before_dispatch() {
        let (handler, counting) = handler_with(WebhookSecret::new(SECRET));
        let cmd = HandleWebhookCommand {
            payload: PURCHASE_BODY.as_bytes().to_vec(),
            signature: Some("deadbeef".to_string()),
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unset_secret_rejects_even_self_consistent_signature() {
        let (handler, counting) = handler_with(WebhookSecret::unset());
        let cmd = HandleWebhookCommand {
            payload: PURCHASE_BODY.as_bytes().to_vec(),
            signature: Some(sign_payload(&WebhookSecret::unset(), PURCHASE_BODY.as_bytes())),
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(WebhookError::MissingSecret)));
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_signature_is_rejected() {
        let (handler, _) = handler_with(WebhookSecret::new(SECRET));
        let cmd = HandleWebhookCommand {
            payload: PURCHASE_BODY.as_bytes().to_vec(),
            signature: None,
        };

        let result = handler.handle(cmd).await;

        assert!(matches!(result, Err(WebhookError::MissingSignature)));
    }

    #[tokio::test]
    async fn authentic_malformed_payload_is_acknowledged() {
        let (handler, counting) = handler_with(WebhookSecret::new(SECRET));

        let outcome = handler.handle(signed("{not json")).await.unwrap();

        assert!(matches!(outcome, DispatchOutcome::Malformed(_)));
        assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_kind_is_unhandled() {
        let (handler, _) = handler_with(WebhookSecret::new(SECRET));

        let outcome = handler
            .handle(signed(r#"{"type":"new.unseen.kind","data":{}}"#))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::Unhandled("new.unseen.kind".to_string())
        );
    }
}
