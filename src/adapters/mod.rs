//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, DTOs and middleware
//! - `whop` - Built-in handlers for Whop event kinds

pub mod http;
pub mod whop;

pub use whop::{default_registry, LoggingHandler};
