//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WHOP_WEBHOOKS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use whop_webhooks::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod webhook;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use webhook::WebhookConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Webhook configuration (secret, header, handler budget)
    #[serde(default)]
    pub webhook: WebhookConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WHOP_WEBHOOKS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WHOP_WEBHOOKS__SERVER__PORT=3000` -> `server.port = 3000`
    /// - `WHOP_WEBHOOKS__WEBHOOK__SECRET=...` -> `webhook.secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing secret is reported by [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WHOP_WEBHOOKS")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid,
    /// including a missing webhook secret.
    ///
    /// The handler budget must be strictly shorter than the request timeout.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.webhook.validate()?;

        let handler_secs = self.webhook.handler_timeout_secs;
        let request_secs = self.server.request_timeout_secs;
        if handler_secs >= request_secs {
            return Err(ValidationError::HandlerTimeoutNotBelowRequestTimeout {
                handler_secs,
                request_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
