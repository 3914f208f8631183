//! Review-platform access layer
//!
//! The remote platform is consumed through a narrow contract: group
//! membership by id, edge lookups filtered by invitation and endpoint,
//! paginated note listings by invitation, and profile search by id. The
//! `Platform` trait is that contract; `PlatformClient` speaks it over REST,
//! and tests substitute an in-memory implementation.

pub mod client;
pub mod types;

pub use client::PlatformClient;
pub use types::{content_str, Edge, Group, Note, NoteDetails, Profile, ProfileContent, Reply};

use async_trait::async_trait;
use thiserror::Error;

/// Platform lookup errors
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Remote review platform, as consumed by the reporting pipeline.
///
/// Absent data is not an error at this layer: an edge lookup with no matches
/// returns an empty list, and absent optional note fields stay absent. Only
/// transport failures, authentication problems, malformed payloads, and
/// missing groups surface as `PlatformError`.
#[async_trait]
pub trait Platform {
    /// Membership group by id, with its ordered member list.
    async fn get_group(&self, id: &str) -> Result<Group, PlatformError>;

    /// All edges of an invitation type, optionally filtered by head or tail
    /// endpoint. Zero matches is a normal empty result.
    async fn get_edges(
        &self,
        invitation: &str,
        head: Option<&str>,
        tail: Option<&str>,
    ) -> Result<Vec<Edge>, PlatformError>;

    /// Every note of an invitation type, fetched page by page. `details`
    /// requests extra per-note payloads (e.g. direct replies).
    async fn list_notes(
        &self,
        invitation: &str,
        details: Option<&str>,
    ) -> Result<Vec<Note>, PlatformError>;

    /// Profiles for the given member ids. Ids without a profile are simply
    /// absent from the result.
    async fn search_profiles(&self, ids: &[String]) -> Result<Vec<Profile>, PlatformError>;
}
