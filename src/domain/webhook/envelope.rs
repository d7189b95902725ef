//! Inbound webhook envelope.

/// Raw webhook delivery as received on the wire.
///
/// The body is kept as the exact received bytes; the signature is computed
/// over these bytes, never over a re-serialized form.
#[derive(Debug, Clone)]
pub struct InboundEnvelope {
    body: Vec<u8>,
    signature: Option<String>,
}

impl InboundEnvelope {
    /// Creates an envelope from the raw body and the signature header value.
    pub fn new(body: impl Into<Vec<u8>>, signature: Option<String>) -> Self {
        Self {
            body: body.into(),
            signature,
        }
    }

    /// The raw request body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The caller-supplied signature, if the header was present.
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    pub(crate) fn into_body(self) -> Vec<u8> {
        self.body
    }
}
