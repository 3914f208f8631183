//! Review completion resolution
//!
//! Each paper has a submitted-reviewers group whose members are anonymized
//! aliases; every alias is itself a one-member group naming the real
//! reviewer. Resolution is two lookups deep and runs per submission, so a
//! failure anywhere yields a [`CompletionResolution::Failed`] for that one
//! paper instead of aborting the whole batch.

use chairscope_common::platform::{Platform, PlatformError};
use tracing::{debug, warn};

use crate::models::{MemberRoster, Submission};

/// Outcome of completion resolution for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResolution {
    /// De-anonymized ids of the reviewers who submitted.
    Resolved(Vec<String>),
    /// Resolution failed; the submission contributes zero completions.
    Failed { reason: String },
}

/// Resolve which reviewers have submitted a review for one submission.
pub async fn resolve_completions(
    platform: &impl Platform,
    venue: &str,
    number: u64,
) -> CompletionResolution {
    match try_resolve(platform, venue, number).await {
        Ok(reviewers) => CompletionResolution::Resolved(reviewers),
        Err(err) => CompletionResolution::Failed {
            reason: err.to_string(),
        },
    }
}

async fn try_resolve(
    platform: &impl Platform,
    venue: &str,
    number: u64,
) -> Result<Vec<String>, PlatformError> {
    let group_id = format!("{}/Paper{}/Reviewers/Submitted", venue, number);
    let submitted = platform.get_group(&group_id).await?;

    let mut reviewers = Vec::with_capacity(submitted.members.len());
    for alias in &submitted.members {
        let alias_group = platform.get_group(alias).await?;
        let reviewer = alias_group.members.first().ok_or_else(|| {
            PlatformError::Parse(format!("alias group {} has no members", alias))
        })?;
        reviewers.push(reviewer.clone());
    }
    Ok(reviewers)
}

/// Fold a resolution into the submission and the reviewer roster.
///
/// Failures are reported at warn level and otherwise ignored; the paper
/// simply shows up with zero completed reviews.
pub fn apply_completions(
    resolution: CompletionResolution,
    submission: &mut Submission,
    reviewers: &mut MemberRoster,
) {
    match resolution {
        CompletionResolution::Resolved(ids) => {
            for id in ids {
                if !reviewers.contains(&id) {
                    // No assignment edge was seen for this reviewer; the
                    // roster entry is created on the spot.
                    debug!(
                        number = submission.number,
                        reviewer = %id,
                        "Completion from reviewer with no assignment edge"
                    );
                }
                reviewers.record_completion(&id, submission.number);
                submission.completed_reviewers.insert(id);
            }
        }
        CompletionResolution::Failed { reason } => {
            warn!(
                number = submission.number,
                reason = %reason,
                "Could not resolve completions, counting zero reviews"
            );
        }
    }
}
