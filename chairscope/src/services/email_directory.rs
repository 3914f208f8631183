//! Member email resolution
//!
//! Report rows need contact addresses next to member ids. The directory is
//! built once per run from a batched profile search and then consulted as a
//! total lookup: ids with no profile or no listed address come back as the
//! [`UNKNOWN`] sentinel instead of failing the report.

use std::collections::BTreeMap;

use chairscope_common::platform::{Platform, PlatformError};
use tracing::{debug, info};

/// Sentinel for ids that cannot be resolved to a contact address.
pub const UNKNOWN: &str = "UNKNOWN";

/// Member id → best contact address.
#[derive(Debug, Default)]
pub struct EmailDirectory {
    emails: BTreeMap<String, String>,
}

impl EmailDirectory {
    /// Resolve profiles for the given ids and keep each one's best address
    /// (preferred, then first confirmed, then first listed).
    pub async fn resolve(
        platform: &impl Platform,
        ids: &[String],
    ) -> Result<Self, PlatformError> {
        let profiles = platform.search_profiles(ids).await?;
        let mut emails = BTreeMap::new();
        for profile in profiles {
            match profile.content.best_email() {
                Some(address) => {
                    emails.insert(profile.id, address.to_string());
                }
                None => debug!(member = %profile.id, "Profile lists no address"),
            }
        }
        info!(
            requested = ids.len(),
            resolved = emails.len(),
            "Resolved member emails"
        );
        Ok(Self { emails })
    }

    /// Build directly from id/address pairs.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            emails: entries.into_iter().collect(),
        }
    }

    /// Best address for a member, or [`UNKNOWN`].
    pub fn lookup(&self, member_id: &str) -> &str {
        self.emails
            .get(member_id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN)
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }
}
