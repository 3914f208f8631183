//! Data models for chairscope (review-cycle reporting)
//!
//! Everything a reporting run accumulates in memory: submissions keyed by
//! display number, and per-member assignment/completion rosters.

pub mod member;
pub mod submission;

pub use member::{AssignmentRosters, Member, MemberRoster, Role};
pub use submission::{MetaReview, Submission, SubmissionRegistry, NO_PREFERRED_VENUE, UNDECIDED};
