//! Webhook signing secret.

use secrecy::{ExposeSecret, SecretString};

/// Shared secret used to key the HMAC over webhook bodies.
///
/// Loaded once at startup and shared read-only for the process lifetime.
/// The value is redacted from `Debug` output.
#[derive(Debug)]
pub struct WebhookSecret(SecretString);

impl WebhookSecret {
    /// Creates a secret from the configured value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(SecretString::new(secret.into()))
    }

    /// Creates an empty secret, which rejects every delivery.
    pub fn unset() -> Self {
        Self::new(String::new())
    }

    /// Returns true if a non-empty secret was configured.
    pub fn is_configured(&self) -> bool {
        !self.0.expose_secret().is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.expose_secret().as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_secret_reports_configured() {
        assert!(WebhookSecret::new("s3cr3t").is_configured());
    }

    #[test]
    fn empty_secret_is_not_configured() {
        assert!(!WebhookSecret::new("").is_configured());
        assert!(!WebhookSecret::unset().is_configured());
    }

    #[test]
    fn debug_output_redacts_value() {
        let secret = WebhookSecret::new("super-private-value");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("super-private-value"));
    }
}
