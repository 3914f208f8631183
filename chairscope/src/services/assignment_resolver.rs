//! Role assignment resolution
//!
//! Review venues express assignments as edges from a submission's note id to
//! a member id, one invitation per role. Commitment sites invert the lookup:
//! chairs live in per-track groups and their edges are fetched by member,
//! then mapped back to submissions through the note-id index.

use std::collections::BTreeSet;

use chairscope_common::platform::{Platform, PlatformError};
use tracing::debug;

use crate::models::{AssignmentRosters, Role, Submission};
use crate::services::submission_loader::CommitmentListing;

/// Resolve every role's assignments for one submission.
///
/// Zero edges for a role is a normal outcome (unassigned paper, or edges
/// redacted for a program-chair conflict) and leaves the set empty.
pub async fn resolve_assignments(
    platform: &impl Platform,
    venue: &str,
    submission: &mut Submission,
    rosters: &mut AssignmentRosters,
) -> Result<(), PlatformError> {
    for role in Role::ALL {
        let invitation = role.assignment_invitation(venue);
        let edges = platform
            .get_edges(&invitation, Some(&submission.id), None)
            .await?;
        for edge in edges {
            submission.role_set_mut(role).insert(edge.tail.clone());
            rosters
                .roster_mut(role)
                .record_assignment(&edge.tail, submission.number);
        }
    }
    debug!(
        number = submission.number,
        sac = submission.sac.len(),
        ac = submission.ac.len(),
        reviewers = submission.reviewers.len(),
        "Resolved assignments"
    );
    Ok(())
}

/// Resolve senior-chair assignments on a commitment site and return every
/// track-group member encountered, for email resolution.
///
/// Prints one line per chair with their assignment count; program chairs use
/// this view to spot tracks that are still unstaffed.
pub async fn resolve_track_chairs(
    platform: &impl Platform,
    venue: &str,
    track_groups: &[String],
    listing: &mut CommitmentListing,
) -> Result<BTreeSet<String>, PlatformError> {
    let mut chairs = BTreeSet::new();

    println!("=== Assignments per senior area chair, by track ===");
    for track in track_groups {
        let group_id = format!("{}/{}_Area_Chairs", venue, track);
        let invitation = format!("{}/{}_Area_Chairs/-/Assignment", venue, track);
        let group = platform.get_group(&group_id).await?;

        for member in &group.members {
            let edges = platform.get_edges(&invitation, None, Some(member)).await?;
            println!("{}\t{}\t#assign: {}", track, member, edges.len());

            for edge in edges {
                let number = *listing.id_to_number.get(&edge.head).ok_or_else(|| {
                    PlatformError::Parse(format!(
                        "assignment edge references unknown note {}",
                        edge.head
                    ))
                })?;
                if let Some(submission) = listing.registry.get_mut(number) {
                    submission.sac.insert(member.clone());
                }
            }
            chairs.insert(member.clone());
        }
    }

    Ok(chairs)
}
