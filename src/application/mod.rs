//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod dispatch;
pub mod handlers;

pub use dispatch::{DispatchMode, EventDispatcher, HandlerRegistry};
pub use handlers::webhook::{HandleWebhookCommand, HandleWebhookHandler};
