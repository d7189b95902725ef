//! Webhook configuration

use axum::http::HeaderName;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::application::dispatch::DispatchMode;
use crate::domain::webhook::WebhookSecret;

/// Webhook receiver configuration (Whop)
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Whop webhook signing secret
    #[serde(default)]
    pub secret: String,

    /// Header carrying the hex HMAC signature
    #[serde(default = "default_signature_header")]
    pub signature_header: String,

    /// Execution budget per handler invocation, in seconds
    #[serde(default = "default_handler_timeout")]
    pub handler_timeout_secs: u64,

    /// Whether to wait for handlers before acknowledging
    #[serde(default)]
    pub dispatch_mode: DispatchMode,
}

impl WebhookConfig {
    /// Build the process-wide signing secret
    pub fn webhook_secret(&self) -> WebhookSecret {
        WebhookSecret::new(self.secret.clone())
    }

    /// Parsed signature header name
    pub fn signature_header_name(&self) -> Result<HeaderName, ValidationError> {
        HeaderName::from_bytes(self.signature_header.trim().as_bytes())
            .map_err(|_| ValidationError::InvalidSignatureHeader(self.signature_header.clone()))
    }

    /// Handler budget as a duration
    pub fn handler_timeout(&self) -> Duration {
        Duration::from_secs(self.handler_timeout_secs)
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret.is_empty() {
            return Err(ValidationError::MissingRequired("WEBHOOK__SECRET"));
        }
        self.signature_header_name()?;
        if self.handler_timeout_secs == 0 || self.handler_timeout_secs > 300 {
            return Err(ValidationError::InvalidHandlerTimeout);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            signature_header: default_signature_header(),
            handler_timeout_secs: default_handler_timeout(),
            dispatch_mode: DispatchMode::default(),
        }
    }
}

fn default_signature_header() -> String {
    "x-whop-signature".to_string()
}

fn default_handler_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> WebhookConfig {
        WebhookConfig {
            secret: "s3cr3t".to_string(),
            signature_header: default_signature_header(),
            handler_timeout_secs: default_handler_timeout(),
            dispatch_mode: DispatchMode::Inline,
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = WebhookConfig {
            secret: String::new(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_invalid_header_name() {
        let config = WebhookConfig {
            signature_header: "bad header".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSignatureHeader(_))
        ));
    }

    #[test]
    fn test_validation_invalid_handler_timeout() {
        let config = WebhookConfig {
            handler_timeout_secs: 0,
            ..valid_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_header_name_is_normalized() {
        let config = WebhookConfig {
            signature_header: "X-Whop-Signature".to_string(),
            ..valid_config()
        };
        assert_eq!(
            config.signature_header_name().unwrap().as_str(),
            "x-whop-signature"
        );
    }

    #[test]
    fn test_webhook_secret_reflects_configuration() {
        assert!(valid_config().webhook_secret().is_configured());
        assert!(!WebhookConfig::default().webhook_secret().is_configured());
    }
}
