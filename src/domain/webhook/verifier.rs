//! Whop webhook signature verification.
//!
//! The sender signs the raw request body with HMAC-SHA256 keyed by the shared
//! secret and sends the lowercase hex digest in a header. Verification
//! recomputes the digest over the exact received bytes and compares it in
//! constant time.

use hmac::{Hmac, Mac};
use serde_json::{Map, Value};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::envelope::InboundEnvelope;
use super::errors::WebhookError;
use super::event::VerifiedEvent;
use super::secret::WebhookSecret;

type HmacSha256 = Hmac<Sha256>;

/// Returns true only if `supplied_signature` is the hex HMAC-SHA256 of
/// `raw_body` under `secret`.
///
/// An unconfigured secret never verifies. Failures are logged; the inputs are
/// never modified.
pub fn verify(secret: &WebhookSecret, raw_body: &[u8], supplied_signature: &str) -> bool {
    match check_signature(secret, raw_body, Some(supplied_signature)) {
        Ok(()) => true,
        Err(err) => {
            log_rejection(&err, raw_body.len(), true);
            false
        }
    }
}

/// Computes the hex HMAC-SHA256 signature a sender attaches to `body`.
pub fn sign_payload(secret: &WebhookSecret, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

fn check_signature(
    secret: &WebhookSecret,
    raw_body: &[u8],
    supplied_signature: Option<&str>,
) -> Result<(), WebhookError> {
    if !secret.is_configured() {
        return Err(WebhookError::MissingSecret);
    }
    let supplied = supplied_signature.ok_or(WebhookError::MissingSignature)?;

    let expected = sign_payload(secret, raw_body);
    if !constant_time_compare(expected.as_bytes(), supplied.as_bytes()) {
        return Err(WebhookError::SignatureMismatch);
    }

    Ok(())
}

fn log_rejection(err: &WebhookError, body_len: usize, signature_present: bool) {
    match err {
        WebhookError::MissingSecret => {
            tracing::error!(
                body_len,
                signature_present,
                "Webhook secret not configured; rejecting delivery"
            );
        }
        _ => {
            tracing::warn!(
                body_len,
                signature_present,
                reason = %err,
                "Webhook signature verification failed"
            );
        }
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Verifier bound to the process-wide signing secret.
#[derive(Debug)]
pub struct SignatureVerifier {
    secret: WebhookSecret,
}

impl SignatureVerifier {
    /// Creates a verifier for the given secret.
    pub fn new(secret: WebhookSecret) -> Self {
        Self { secret }
    }

    /// Returns true if a signing secret is configured.
    pub fn is_configured(&self) -> bool {
        self.secret.is_configured()
    }

    /// Authenticates an inbound delivery.
    ///
    /// # Errors
    ///
    /// - `MissingSecret` - No secret configured
    /// - `MissingSignature` - The signature header was absent
    /// - `SignatureMismatch` - The signature does not match the body
    pub fn verify_envelope(
        &self,
        envelope: InboundEnvelope,
    ) -> Result<VerifiedEnvelope, WebhookError> {
        if let Err(err) = check_signature(&self.secret, envelope.body(), envelope.signature()) {
            log_rejection(&err, envelope.body().len(), envelope.signature().is_some());
            return Err(err);
        }

        Ok(VerifiedEnvelope {
            body: envelope.into_body(),
        })
    }
}

/// Raw body of a delivery whose signature has been verified.
///
/// Only [`SignatureVerifier::verify_envelope`] constructs this type.
#[derive(Debug)]
pub struct VerifiedEnvelope {
    body: Vec<u8>,
}

impl VerifiedEnvelope {
    /// The authenticated raw body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Interprets the authenticated body as a `{type, data}` event.
    ///
    /// A missing or null `data` field becomes an empty object.
    ///
    /// # Errors
    ///
    /// Returns `MalformedPayload` if the body is not a JSON object, `type` is
    /// missing or not a non-empty string, or `data` is not an object.
    pub fn into_event(self) -> Result<VerifiedEvent, WebhookError> {
        let value: Value = serde_json::from_slice(&self.body)
            .map_err(|e| WebhookError::MalformedPayload(format!("invalid JSON: {}", e)))?;

        let Value::Object(mut object) = value else {
            return Err(WebhookError::MalformedPayload(
                "payload is not a JSON object".to_string(),
            ));
        };

        let kind = match object.remove("type") {
            Some(Value::String(kind)) if !kind.trim().is_empty() => kind,
            Some(_) => {
                return Err(WebhookError::MalformedPayload(
                    "event type must be a non-empty string".to_string(),
                ))
            }
            None => {
                return Err(WebhookError::MalformedPayload(
                    "missing event type".to_string(),
                ))
            }
        };

        let data = match object.remove("data") {
            None | Some(Value::Null) => Value::Object(Map::new()),
            Some(data @ Value::Object(_)) => data,
            Some(_) => {
                return Err(WebhookError::MalformedPayload(
                    "event data must be an object".to_string(),
                ))
            }
        };

        Ok(VerifiedEvent::from_verified_parts(kind, data))
    }
}
