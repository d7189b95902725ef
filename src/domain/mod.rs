//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - Signing secret, signature verification, verified events
//!   and dispatch outcomes

pub mod webhook;
