//! Verified webhook events.
//!
//! A [`VerifiedEvent`] can only be obtained from a
//! [`VerifiedEnvelope`](super::VerifiedEnvelope), so every event reaching the
//! dispatcher has passed signature verification.

use serde_json::Value;

/// Event whose delivery passed signature verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedEvent {
    kind: String,
    data: Value,
}

impl VerifiedEvent {
    pub(super) fn from_verified_parts(kind: String, data: Value) -> Self {
        Self { kind, data }
    }

    /// Event kind (the payload's `type` field).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Event data object.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Splits the event into its kind and data.
    pub fn into_parts(self) -> (String, Value) {
        (self.kind, self.data)
    }
}

/// Event kinds currently emitted by Whop that the application knows about.
///
/// Kinds outside this set are still delivered; they are simply unregistered
/// by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhopEventKind {
    /// A purchase was completed.
    PurchaseCreated,
    /// A membership became active.
    MembershipStarted,
    /// A membership was cancelled.
    MembershipCancelled,
    /// A member's access was revoked.
    AccessRevoked,
}

impl WhopEventKind {
    /// All known kinds.
    pub const ALL: [WhopEventKind; 4] = [
        Self::PurchaseCreated,
        Self::MembershipStarted,
        Self::MembershipCancelled,
        Self::AccessRevoked,
    ];

    /// Parse a kind from its wire string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "purchase.created" => Some(Self::PurchaseCreated),
            "membership.started" => Some(Self::MembershipStarted),
            "membership.cancelled" => Some(Self::MembershipCancelled),
            "access_revoked" => Some(Self::AccessRevoked),
            _ => None,
        }
    }

    /// The wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PurchaseCreated => "purchase.created",
            Self::MembershipStarted => "membership.started",
            Self::MembershipCancelled => "membership.cancelled",
            Self::AccessRevoked => "access_revoked",
        }
    }
}

impl std::fmt::Display for WhopEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_kinds() {
        assert_eq!(
            WhopEventKind::parse("purchase.created"),
            Some(WhopEventKind::PurchaseCreated)
        );
        assert_eq!(
            WhopEventKind::parse("access_revoked"),
            Some(WhopEventKind::AccessRevoked)
        );
    }

    #[test]
    fn parse_unknown_kind_returns_none() {
        assert_eq!(WhopEventKind::parse("new.unseen.kind"), None);
        assert_eq!(WhopEventKind::parse(""), None);
    }

    #[test]
    fn as_str_matches_parse_for_all_kinds() {
        for kind in WhopEventKind::ALL {
            assert_eq!(WhopEventKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn display_uses_wire_string() {
        assert_eq!(
            WhopEventKind::MembershipCancelled.to_string(),
            "membership.cancelled"
        );
    }
}
