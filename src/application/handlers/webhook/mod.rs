//! Webhook handlers.
//!
//! ## Commands
//! - Processing signed Whop deliveries

mod handle_webhook;

pub use handle_webhook::{HandleWebhookCommand, HandleWebhookHandler};
