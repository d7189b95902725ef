//! Webhook domain module.
//!
//! Authenticates inbound Whop notifications and models the verified events
//! handed to the dispatcher.
//!
//! # Module Structure
//!
//! - `secret` - Shared HMAC signing secret
//! - `envelope` - Raw inbound request (body bytes + supplied signature)
//! - `verifier` - HMAC-SHA256 signature verification
//! - `event` - Verified events and the known Whop event kinds
//! - `outcome` - Per-request dispatch outcome
//! - `errors` - Webhook error taxonomy

mod envelope;
mod errors;
mod event;
mod outcome;
mod secret;
mod verifier;

pub use envelope::InboundEnvelope;
pub use errors::WebhookError;
pub use event::{VerifiedEvent, WhopEventKind};
pub use outcome::DispatchOutcome;
pub use secret::WebhookSecret;
pub use verifier::{sign_payload, verify, SignatureVerifier, VerifiedEnvelope};
