//! Event dispatch.
//!
//! - `registry` - Immutable kind-to-handler table built at startup
//! - `dispatcher` - Runs the matching handler for a verified event

mod dispatcher;
mod registry;

pub use dispatcher::{DispatchMode, EventDispatcher, DEFAULT_HANDLER_TIMEOUT};
pub use registry::{HandlerRegistry, HandlerRegistryBuilder};
