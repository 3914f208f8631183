//! Submission listing loaders
//!
//! Review venues expose two listings: a blind one that is authoritative for
//! which papers are active, and a non-blind one that carries author-declared
//! fields. Commitment sites use a single listing whose direct replies hold
//! decisions and senior-chair meta-reviews. Both loaders paginate through
//! the platform client and return a populated [`SubmissionRegistry`].

use std::collections::BTreeMap;

use chairscope_common::platform::{Platform, PlatformError, Reply};
use tracing::{debug, info};

use crate::models::{MetaReview, Submission, SubmissionRegistry};

/// Details expansion that inlines each note's direct replies.
const DETAILS_DIRECT_REPLIES: &str = "directReplies";

/// Invitation suffix shared by meta-review replies across venues.
const META_REVIEW_SUFFIX: &str = "Meta_Review";

fn blind_submission_invitation(venue: &str) -> String {
    format!("{}/-/Blind_Submission", venue)
}

fn submission_invitation(venue: &str) -> String {
    format!("{}/-/Submission", venue)
}

/// Load the active submissions for a review venue.
///
/// The blind listing decides which papers exist; the non-blind listing only
/// decorates them (currently with the preferred-venue declaration). Numbers
/// present in the non-blind listing alone belong to withdrawn or
/// desk-rejected papers and are tallied, never inserted.
pub async fn load_submissions(
    platform: &impl Platform,
    venue: &str,
) -> Result<SubmissionRegistry, PlatformError> {
    let mut registry = SubmissionRegistry::default();

    let blind = platform
        .list_notes(&blind_submission_invitation(venue), None)
        .await?;
    for note in &blind {
        let mut submission = Submission::new(note.number, note.id.clone(), note.original.clone());
        if let Some(title) = note.content_str("title") {
            submission.title = title.to_string();
        }
        if let Some(area) = note.content_str("research_area") {
            submission.research_area = area.to_string();
        }
        registry.insert(submission);
    }
    info!(active = registry.len(), "Loaded blind submission listing");

    let nonblind = platform
        .list_notes(&submission_invitation(venue), None)
        .await?;
    for note in &nonblind {
        match registry.get_mut(note.number) {
            Some(submission) => {
                if let Some(preferred) = note.content_str("preferred_venue") {
                    submission.set_preferred_venue(preferred);
                }
            }
            None => registry.record_withdrawn(note.number),
        }
    }
    info!(
        withdrawn = registry.withdrawn_count(),
        "Merged non-blind submission listing"
    );

    Ok(registry)
}

/// Commitment-site listing: submissions plus the note-id index that
/// assignment edges on such sites are keyed by.
#[derive(Debug, Default)]
pub struct CommitmentListing {
    pub registry: SubmissionRegistry,
    /// Platform note id → display number.
    pub id_to_number: BTreeMap<String, u64>,
}

/// Load a commitment site's single submission listing, with direct replies
/// expanded so decisions and meta-reviews arrive in the same pass.
pub async fn load_commitment_submissions(
    platform: &impl Platform,
    venue: &str,
) -> Result<CommitmentListing, PlatformError> {
    let notes = platform
        .list_notes(
            &submission_invitation(venue),
            Some(DETAILS_DIRECT_REPLIES),
        )
        .await?;

    let mut listing = CommitmentListing::default();
    for note in &notes {
        let mut submission = Submission::new(note.number, note.id.clone(), note.original.clone());
        if let Some(title) = note.content_str("title") {
            submission.title = title.to_string();
        }
        if let Some(track) = note.content_str("track") {
            submission.research_area = track.to_string();
        }
        if let Some(decision) = note.content_str("decision") {
            submission.set_decision(decision);
        }

        for reply in note.direct_replies() {
            ingest_reply(venue, reply, &mut submission);
        }
        if !submission.previous_chairs.is_empty() {
            debug!(
                number = submission.number,
                cycles = submission.previous_chairs.len(),
                "Found prior-cycle meta-reviews"
            );
        }

        listing.id_to_number.insert(note.id.clone(), note.number);
        listing.registry.insert(submission);
    }
    info!(
        submissions = listing.registry.len(),
        "Loaded commitment-site listing"
    );

    Ok(listing)
}

/// Fold one direct reply into the submission. Only meta-review replies
/// matter: ones signed by the venue itself were copied forward from an
/// earlier cycle, everything else is the current senior-chair meta-review.
fn ingest_reply(venue: &str, reply: &Reply, submission: &mut Submission) {
    let is_meta_review = reply
        .primary_invitation()
        .map(|inv| inv.ends_with(META_REVIEW_SUFFIX))
        .unwrap_or(false);
    if !is_meta_review {
        return;
    }

    if reply.signatures.first().map(String::as_str) == Some(venue) {
        match parse_previous_cycle_title(reply.content_str("title").unwrap_or_default()) {
            Some((cycle, chair)) => {
                submission.previous_chairs.insert(cycle, chair);
            }
            None => debug!(
                number = submission.number,
                "Venue-signed meta-review title does not name a prior cycle"
            ),
        }
    } else {
        submission.meta_review = Some(MetaReview {
            recommendation: reply.content_str("recommendation").unwrap_or_default().to_string(),
            metareview: reply.content_str("metareview").unwrap_or_default().to_string(),
            award: reply.content_str("award").unwrap_or_default().to_string(),
            award_justification: reply
                .content_str("award_justification")
                .unwrap_or_default()
                .to_string(),
        });
    }
}

/// Pull the cycle label and anonymized chair id out of a copied-forward
/// meta-review title. The venue writes these with a fixed word layout: the
/// sixth word names the cycle, the ninth the anonymized chair.
fn parse_previous_cycle_title(title: &str) -> Option<(String, String)> {
    let words: Vec<&str> = title.split_whitespace().collect();
    let cycle = words.get(5)?;
    let chair = words.get(8)?;
    Some((cycle.to_string(), chair.to_string()))
}
