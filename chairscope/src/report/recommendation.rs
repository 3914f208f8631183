//! Senior-chair recommendation export
//!
//! One row per commitment-site submission whose recommendation is ready to
//! act on: still undecided, with a meta-review filed, and not conflicted for
//! the program chairs. Everything else is tallied as unfinished so the
//! console summary shows how much is left.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chairscope_common::Result;
use tracing::info;

use crate::models::{Submission, SubmissionRegistry};
use crate::report::sanitize_field;
use crate::services::email_directory::{EmailDirectory, UNKNOWN};

pub const RECOMMENDATION_HEADER: &str = "PaperID\tSAC_name\tSAC_email\tArea\tTitle\tSAC_recommendation\tSAC_metareview\tSAC_award_suggestion\tSAC_award_justification";

/// Export eligibility for one submission, decided in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportEligibility {
    /// Undecided with a meta-review: gets a row.
    Export,
    /// Program-chair conflict: neither exported nor counted.
    SkipConflict,
    /// A decision already landed.
    SkipDecided,
    /// Undecided but no meta-review has been filed yet.
    SkipMissingMetaReview,
}

pub fn classify(submission: &Submission, coi_papers: &BTreeSet<u64>) -> ExportEligibility {
    if coi_papers.contains(&submission.number) {
        ExportEligibility::SkipConflict
    } else if !submission.is_undecided() {
        ExportEligibility::SkipDecided
    } else if submission.meta_review.is_none() {
        ExportEligibility::SkipMissingMetaReview
    } else {
        ExportEligibility::Export
    }
}

/// Row counts for the console summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecommendationSummary {
    pub exported: usize,
    pub not_finished: usize,
}

impl RecommendationSummary {
    /// Console summary naming the file and its column layout.
    pub fn print_summary(&self, path: &Path) {
        println!("=== Saved recommendations in TSV file: {} ===", path.display());
        println!("Format is:");
        println!("{}", RECOMMENDATION_HEADER);
        println!(
            "#finished: {} / #not_finished: {}",
            self.exported, self.not_finished
        );
    }
}

/// Write the recommendation file and return the export/unfinished tallies.
pub fn write_recommendation_report(
    path: &Path,
    registry: &SubmissionRegistry,
    emails: &EmailDirectory,
    coi_papers: &BTreeSet<u64>,
) -> Result<RecommendationSummary> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", RECOMMENDATION_HEADER)?;

    let mut summary = RecommendationSummary::default();
    for (number, submission) in registry.iter() {
        match classify(submission, coi_papers) {
            ExportEligibility::Export => {
                // classify only returns Export when a meta-review is present
                let Some(meta) = submission.meta_review.as_ref() else {
                    continue;
                };
                let chair = submission.first_sac().unwrap_or(UNKNOWN);
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    number,
                    chair,
                    emails.lookup(chair),
                    sanitize_field(&submission.research_area),
                    sanitize_field(&submission.title),
                    sanitize_field(&meta.recommendation),
                    sanitize_field(&meta.metareview),
                    sanitize_field(&meta.award),
                    sanitize_field(&meta.award_justification)
                )?;
                summary.exported += 1;
            }
            ExportEligibility::SkipConflict => {}
            ExportEligibility::SkipDecided | ExportEligibility::SkipMissingMetaReview => {
                summary.not_finished += 1;
            }
        }
    }
    out.flush()?;

    info!(
        path = %path.display(),
        exported = summary.exported,
        not_finished = summary.not_finished,
        "Wrote recommendation report"
    );
    Ok(summary)
}
