//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the core and the outside world. Adapters implement these ports.
//!
//! ## Webhook Ports
//!
//! - `WebhookHandler` - Per-kind handler invoked for verified events

mod webhook_handler;

pub use webhook_handler::{HandlerError, WebhookHandler};
