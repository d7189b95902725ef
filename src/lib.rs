//! Whop Webhooks - Signed webhook receiver for Whop commerce notifications
//!
//! Authenticates each delivery with an HMAC-SHA256 signature over the raw
//! body, then routes the verified event to the handler registered for its
//! kind.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
