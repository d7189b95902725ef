//! Whop handler adapters.
//!
//! Default handler implementations for the known Whop event kinds.

mod logging_handler;

pub use logging_handler::{default_registry, LoggingHandler};
