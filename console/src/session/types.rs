//! Session record cached in browser storage.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Identity fields cached next to the token so the UI can show who is signed
/// in without a round trip.
///
/// Field names follow the backend user record. Every field is optional: an
/// empty object is still a usable summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "UserId", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Email", alias = "email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Role", alias = "role", default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserSummary {
    /// Best available label for headers and greetings.
    pub fn display_name(&self) -> String {
        self.email
            .as_deref()
            .or(self.id.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("Admin")
            .to_owned()
    }
}

/// A complete signed-in session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
    pub expires_at: OffsetDateTime,
}

impl Session {
    /// A session expires at its `expires_at` instant, not after it.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

/// Parse a stored ISO-8601 expiry. Returns `None` for anything unparseable.
pub fn parse_expiry(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()
}

/// Format an expiry the way it is persisted.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be represented in RFC 3339
/// (years outside `0..=9999`).
pub fn format_expiry(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.format(&Rfc3339)
}
