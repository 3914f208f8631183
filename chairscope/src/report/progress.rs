//! Review-progress statistics and urgent-paper selection

use std::collections::{BTreeMap, BTreeSet};

use crate::models::SubmissionRegistry;

/// Aggregated review progress over the whole registry.
#[derive(Debug, Default)]
pub struct ProgressStats {
    /// Completed-review count → number of papers at that count.
    pub histogram: BTreeMap<usize, usize>,
    /// Papers at or below the urgent threshold, conflicts excluded,
    /// ascending by number.
    pub urgent: Vec<u64>,
    total: usize,
    threshold: usize,
}

impl ProgressStats {
    /// One pass over the registry: bucket papers by completed-review count
    /// and pick out the urgent ones. Papers in `coi_papers` are kept in the
    /// histogram (where they show up with zero reviews, since their edges
    /// are redacted) but never selected as urgent.
    pub fn collect(
        registry: &SubmissionRegistry,
        threshold: usize,
        coi_papers: &BTreeSet<u64>,
    ) -> Self {
        let mut stats = ProgressStats {
            total: registry.len(),
            threshold,
            ..Default::default()
        };
        for (number, submission) in registry.iter() {
            let completed = submission.completed_count();
            *stats.histogram.entry(completed).or_insert(0) += 1;
            if completed <= threshold && !coi_papers.contains(number) {
                stats.urgent.push(*number);
            }
        }
        stats
    }

    /// Papers with at most `threshold` completed reviews. This is the
    /// histogram view and still includes conflicted papers.
    pub fn at_or_below_threshold(&self) -> usize {
        self.histogram
            .iter()
            .filter(|(count, _)| **count <= self.threshold)
            .map(|(_, papers)| papers)
            .sum()
    }

    /// Console summary with per-bucket percentages.
    pub fn print_summary(&self) {
        for (count, papers) in &self.histogram {
            let percent = if self.total == 0 {
                0.0
            } else {
                100.0 * *papers as f64 / self.total as f64
            };
            println!("Papers with {} completed reviews: {} ({:.2}%)", count, papers, percent);
        }
        println!(
            "Papers with <= {} completed reviews: {}",
            self.threshold,
            self.at_or_below_threshold()
        );
        println!("  (conflicted papers show up as having 0 reviews)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Submission;

    fn registry_with_counts(counts: &[(u64, usize)]) -> SubmissionRegistry {
        let mut registry = SubmissionRegistry::default();
        for (number, completed) in counts {
            let mut submission = Submission::new(*number, format!("n{number}"), None);
            for i in 0..*completed {
                submission
                    .completed_reviewers
                    .insert(format!("~Reviewer_{i}1"));
            }
            registry.insert(submission);
        }
        registry
    }

    #[test]
    fn histogram_buckets_by_completed_count() {
        let registry = registry_with_counts(&[(1, 0), (2, 3), (3, 3), (4, 1)]);
        let stats = ProgressStats::collect(&registry, 2, &BTreeSet::new());

        assert_eq!(stats.histogram.get(&0), Some(&1));
        assert_eq!(stats.histogram.get(&1), Some(&1));
        assert_eq!(stats.histogram.get(&3), Some(&2));
        assert_eq!(stats.at_or_below_threshold(), 2);
        assert_eq!(stats.urgent, vec![1, 4]);
    }

    #[test]
    fn conflicted_papers_never_become_urgent() {
        let registry = registry_with_counts(&[(1, 0), (2, 0)]);
        let coi: BTreeSet<u64> = [1].into_iter().collect();
        let stats = ProgressStats::collect(&registry, 2, &coi);

        assert_eq!(stats.urgent, vec![2]);
        // still present in the histogram view
        assert_eq!(stats.histogram.get(&0), Some(&2));
        assert_eq!(stats.at_or_below_threshold(), 2);
    }

    #[test]
    fn empty_registry_yields_empty_stats() {
        let stats = ProgressStats::collect(&SubmissionRegistry::default(), 2, &BTreeSet::new());
        assert!(stats.histogram.is_empty());
        assert!(stats.urgent.is_empty());
        assert_eq!(stats.at_or_below_threshold(), 0);
    }
}
