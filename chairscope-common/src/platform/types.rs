//! Wire types for the review platform API
//!
//! These are deliberately loose: every optional field defaults instead of
//! erroring, and string content fields are read through [`content_str`] which
//! accepts both the plain (v1) and `{"value": …}`-wrapped (v2) shapes. The
//! rest of the tool never touches raw JSON.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Membership group
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Directed relation record between two platform entities, optionally
/// carrying a numeric weight (declared load capacity, bids, …)
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    pub head: String,
    pub tail: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

/// Note record: a submission or a review form
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    pub id: String,
    pub number: u64,
    /// Original (non-blind) note id carried on blind copies
    #[serde(default)]
    pub original: Option<String>,
    #[serde(default)]
    pub content: Map<String, Value>,
    #[serde(default)]
    pub details: Option<NoteDetails>,
}

impl Note {
    /// String content field with v1/v2 unwrapping; None when absent.
    pub fn content_str(&self, key: &str) -> Option<&str> {
        content_str(&self.content, key)
    }

    /// Replies attached to this note, empty when details were not requested.
    pub fn direct_replies(&self) -> &[Reply] {
        self.details
            .as_ref()
            .map(|d| d.direct_replies.as_slice())
            .unwrap_or(&[])
    }
}

/// Optional per-note payloads requested via the `details` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteDetails {
    #[serde(rename = "directReplies", default)]
    pub direct_replies: Vec<Reply>,
}

/// Reply attached to a note (meta-reviews, official reviews, comments)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reply {
    /// Single invitation id (v1 notes)
    #[serde(default)]
    pub invitation: Option<String>,
    /// Invitation id list (v2 notes)
    #[serde(default)]
    pub invitations: Vec<String>,
    #[serde(default)]
    pub signatures: Vec<String>,
    #[serde(default)]
    pub content: Map<String, Value>,
}

impl Reply {
    /// First invitation on the reply, across API versions.
    pub fn primary_invitation(&self) -> Option<&str> {
        self.invitations
            .first()
            .map(String::as_str)
            .or(self.invitation.as_deref())
    }

    /// String content field with v1/v2 unwrapping; None when absent.
    pub fn content_str(&self, key: &str) -> Option<&str> {
        content_str(&self.content, key)
    }
}

/// Member profile with contact addresses
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub content: ProfileContent,
}

/// Contact-address fields of a profile. Priority for "the" email:
/// `preferredEmail`, else first of `emailsConfirmed`, else first of `emails`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileContent {
    #[serde(rename = "preferredEmail", default)]
    pub preferred_email: Option<String>,
    #[serde(rename = "emailsConfirmed", default)]
    pub emails_confirmed: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
}

impl ProfileContent {
    /// Best contact address under the documented priority order, or None
    /// when the profile lists no address at all.
    pub fn best_email(&self) -> Option<&str> {
        self.preferred_email
            .as_deref()
            .or_else(|| self.emails_confirmed.first().map(String::as_str))
            .or_else(|| self.emails.first().map(String::as_str))
    }
}

/// Read a string content field. Plain strings (v1) and `{"value": "…"}`
/// objects (v2) both resolve; anything else is treated as absent.
pub fn content_str<'a>(content: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match content.get(key)? {
        Value::String(s) => Some(s.as_str()),
        Value::Object(wrapped) => wrapped.get("value").and_then(Value::as_str),
        _ => None,
    }
}
