//! Submission records and the registry that holds one review cycle
//!
//! A [`Submission`] accumulates everything the pipeline learns about one
//! paper: identity from the listing pass, role assignments from the edge
//! pass, completion status from the group pass, and (on commitment sites)
//! decision and meta-review data. The [`SubmissionRegistry`] keys records by
//! display number, which is what every downstream report sorts by.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::member::Role;

/// Preferred-venue value for submissions whose authors never declared one.
pub const NO_PREFERRED_VENUE: &str = "none";

/// Decision value for submissions still awaiting a decision.
pub const UNDECIDED: &str = "undecided";

/// Senior-chair recommendation payload filed against a commitment-site
/// submission. Absent fields degrade to empty strings rather than errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaReview {
    pub recommendation: String,
    pub metareview: String,
    pub award: String,
    pub award_justification: String,
}

/// One paper submission and everything resolved against it during a run.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Display number, unique within a review cycle.
    pub number: u64,
    /// Platform note id (the blind copy where the venue splits the two).
    pub id: String,
    /// Non-blind note id, when the platform exposes one.
    pub original: Option<String>,
    pub title: String,
    /// Research area or track label, as free text from the listing.
    pub research_area: String,
    /// Author-declared preferred venue, trimmed and lower-cased. Stays at
    /// [`NO_PREFERRED_VENUE`] until the non-blind listing supplies a value.
    pub preferred_venue: String,
    /// Assigned senior area chairs.
    pub sac: BTreeSet<String>,
    /// Assigned area chairs.
    pub ac: BTreeSet<String>,
    /// Assigned reviewers.
    pub reviewers: BTreeSet<String>,
    /// Reviewers who submitted a review. Usually a subset of `reviewers`,
    /// but a completion from an unlisted reviewer is kept, not rejected.
    pub completed_reviewers: BTreeSet<String>,
    /// Decision label, trimmed and lower-cased; [`UNDECIDED`] until a
    /// decision lands on the note.
    pub decision: String,
    /// Senior-chair recommendation, once one has been filed.
    pub meta_review: Option<MetaReview>,
    /// Cycle label → anonymized chair id, copied forward by commitment
    /// sites from earlier review cycles.
    pub previous_chairs: BTreeMap<String, String>,
}

impl Submission {
    pub fn new(number: u64, id: impl Into<String>, original: Option<String>) -> Self {
        Self {
            number,
            id: id.into(),
            original,
            title: String::new(),
            research_area: String::new(),
            preferred_venue: NO_PREFERRED_VENUE.to_string(),
            sac: BTreeSet::new(),
            ac: BTreeSet::new(),
            reviewers: BTreeSet::new(),
            completed_reviewers: BTreeSet::new(),
            decision: UNDECIDED.to_string(),
            meta_review: None,
            previous_chairs: BTreeMap::new(),
        }
    }

    /// Record the author-declared preferred venue, normalized for counting.
    pub fn set_preferred_venue(&mut self, raw: &str) {
        self.preferred_venue = raw.trim().to_lowercase();
    }

    /// Record the decision label, normalized the same way.
    pub fn set_decision(&mut self, raw: &str) {
        self.decision = raw.trim().to_lowercase();
    }

    pub fn is_undecided(&self) -> bool {
        self.decision == UNDECIDED
    }

    pub fn completed_count(&self) -> usize {
        self.completed_reviewers.len()
    }

    /// Lexicographically smallest assigned senior chair, if any. Reports
    /// that have room for a single contact always pick this one, so reruns
    /// against unchanged data produce identical rows.
    pub fn first_sac(&self) -> Option<&str> {
        self.sac.iter().next().map(String::as_str)
    }

    /// Lexicographically smallest assigned area chair, if any.
    pub fn first_ac(&self) -> Option<&str> {
        self.ac.iter().next().map(String::as_str)
    }

    /// Assignment set for one role.
    pub fn role_set(&self, role: Role) -> &BTreeSet<String> {
        match role {
            Role::SeniorAreaChairs => &self.sac,
            Role::AreaChairs => &self.ac,
            Role::Reviewers => &self.reviewers,
        }
    }

    pub fn role_set_mut(&mut self, role: Role) -> &mut BTreeSet<String> {
        match role {
            Role::SeniorAreaChairs => &mut self.sac,
            Role::AreaChairs => &mut self.ac,
            Role::Reviewers => &mut self.reviewers,
        }
    }
}

/// Active submissions for one cycle, keyed by display number.
///
/// Numbers seen only in the non-blind listing belong to withdrawn or
/// desk-rejected papers; they are tallied but never inserted.
#[derive(Debug, Default)]
pub struct SubmissionRegistry {
    submissions: BTreeMap<u64, Submission>,
    withdrawn: BTreeSet<u64>,
}

impl SubmissionRegistry {
    pub fn insert(&mut self, submission: Submission) {
        self.submissions.insert(submission.number, submission);
    }

    pub fn contains(&self, number: u64) -> bool {
        self.submissions.contains_key(&number)
    }

    pub fn get(&self, number: u64) -> Option<&Submission> {
        self.submissions.get(&number)
    }

    pub fn get_mut(&mut self, number: u64) -> Option<&mut Submission> {
        self.submissions.get_mut(&number)
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Submissions in ascending display-number order.
    pub fn iter(&self) -> impl Iterator<Item = (&u64, &Submission)> {
        self.submissions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&u64, &mut Submission)> {
        self.submissions.iter_mut()
    }

    /// All display numbers, ascending.
    pub fn numbers(&self) -> Vec<u64> {
        self.submissions.keys().copied().collect()
    }

    /// Tally a number that appeared outside the authoritative listing.
    pub fn record_withdrawn(&mut self, number: u64) {
        self.withdrawn.insert(number);
    }

    pub fn withdrawn_count(&self) -> usize {
        self.withdrawn.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_submission_has_safe_defaults() {
        let s = Submission::new(12, "note_abc", None);
        assert_eq!(s.preferred_venue, NO_PREFERRED_VENUE);
        assert_eq!(s.decision, UNDECIDED);
        assert!(s.is_undecided());
        assert!(s.sac.is_empty());
        assert!(s.completed_reviewers.is_empty());
        assert!(s.meta_review.is_none());
    }

    #[test]
    fn preferred_venue_is_trimmed_and_lowercased() {
        let mut s = Submission::new(1, "n1", None);
        s.set_preferred_venue("  EMNLP 2023 ");
        assert_eq!(s.preferred_venue, "emnlp 2023");
    }

    #[test]
    fn decision_normalization_drives_is_undecided() {
        let mut s = Submission::new(1, "n1", None);
        s.set_decision(" Undecided ");
        assert!(s.is_undecided());
        s.set_decision("Accept (Main)");
        assert!(!s.is_undecided());
    }

    #[test]
    fn first_chair_is_lexicographically_smallest() {
        let mut s = Submission::new(1, "n1", None);
        s.sac.insert("~Zoe_Chair1".to_string());
        s.sac.insert("~Ada_Chair1".to_string());
        assert_eq!(s.first_sac(), Some("~Ada_Chair1"));
        assert_eq!(s.first_ac(), None);
    }

    #[test]
    fn registry_counts_withdrawn_numbers_once() {
        let mut registry = SubmissionRegistry::default();
        registry.insert(Submission::new(3, "n3", None));
        registry.record_withdrawn(7);
        registry.record_withdrawn(7);
        registry.record_withdrawn(9);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.withdrawn_count(), 2);
        assert!(!registry.contains(7));
    }

    #[test]
    fn registry_iterates_in_number_order() {
        let mut registry = SubmissionRegistry::default();
        for n in [5, 2, 9] {
            registry.insert(Submission::new(n, format!("n{n}"), None));
        }
        let numbers: Vec<u64> = registry.iter().map(|(n, _)| *n).collect();
        assert_eq!(numbers, vec![2, 5, 9]);
        assert_eq!(registry.numbers(), vec![2, 5, 9]);
    }
}
