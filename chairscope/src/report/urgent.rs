//! Urgent-papers export
//!
//! Contact sheet for papers still short on reviews: one row per paper with
//! its senior area chair and area chair plus their addresses, so a program
//! chair can start nudging without further lookups.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chairscope_common::Result;
use tracing::info;

use crate::models::SubmissionRegistry;
use crate::services::email_directory::{EmailDirectory, UNKNOWN};

pub const URGENT_HEADER: &str = "SubmissionID\tSAC\tSAC_email\tAC\tAC_email\t#ReviewsCompleted";

/// Write the urgent-papers file and return the number of data rows.
///
/// Rows follow the order of `urgent` (ascending submission number). Papers
/// with several chairs in a role contribute the lexicographically smallest
/// one; papers with none show [`UNKNOWN`] in both the id and email columns.
pub fn write_urgent_report(
    path: &Path,
    registry: &SubmissionRegistry,
    urgent: &[u64],
    emails: &EmailDirectory,
) -> Result<usize> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", URGENT_HEADER)?;

    let mut rows = 0;
    for number in urgent {
        let Some(submission) = registry.get(*number) else {
            continue;
        };
        let sac = submission.first_sac().unwrap_or(UNKNOWN);
        let ac = submission.first_ac().unwrap_or(UNKNOWN);
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}",
            number,
            sac,
            emails.lookup(sac),
            ac,
            emails.lookup(ac),
            submission.completed_count()
        )?;
        rows += 1;
    }
    out.flush()?;

    info!(path = %path.display(), rows, "Wrote urgent-papers report");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn rows_carry_chairs_and_emails() {
        let mut registry = SubmissionRegistry::default();
        let mut s = Submission::new(7, "n7", None);
        s.sac.insert("~Sac_B1".to_string());
        s.sac.insert("~Sac_A1".to_string());
        s.ac.insert("~Ac_X1".to_string());
        s.completed_reviewers.insert("~Reviewer_A1".to_string());
        registry.insert(s);

        let emails = EmailDirectory::from_entries([
            ("~Sac_A1".to_string(), "sac-a@example.org".to_string()),
            ("~Ac_X1".to_string(), "ac-x@example.org".to_string()),
        ]);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urgent_papers.tsv");
        let rows = write_urgent_report(&path, &registry, &[7], &emails).unwrap();
        assert_eq!(rows, 1);

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some(URGENT_HEADER));
        assert_eq!(
            lines.next(),
            Some("7\t~Sac_A1\tsac-a@example.org\t~Ac_X1\tac-x@example.org\t1")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn missing_chairs_become_unknown_in_both_columns() {
        let mut registry = SubmissionRegistry::default();
        registry.insert(Submission::new(3, "n3", None));

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urgent_papers.tsv");
        let rows =
            write_urgent_report(&path, &registry, &[3], &EmailDirectory::default()).unwrap();
        assert_eq!(rows, 1);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written.lines().nth(1),
            Some("3\tUNKNOWN\tUNKNOWN\tUNKNOWN\tUNKNOWN\t0")
        );
    }

    #[test]
    fn unknown_numbers_are_skipped() {
        let registry = SubmissionRegistry::default();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("urgent_papers.tsv");
        let rows =
            write_urgent_report(&path, &registry, &[1, 2], &EmailDirectory::default()).unwrap();
        assert_eq!(rows, 0);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
    }
}
