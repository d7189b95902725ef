//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid socket address: {0}")]
    InvalidSocketAddr(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid handler timeout")]
    InvalidHandlerTimeout,

    #[error("Handler timeout ({handler_secs}s) must be shorter than request timeout ({request_secs}s)")]
    HandlerTimeoutNotBelowRequestTimeout { handler_secs: u64, request_secs: u64 },

    #[error("Invalid signature header name: {0}")]
    InvalidSignatureHeader(String),
}
