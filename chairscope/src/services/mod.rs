//! Pipeline services for chairscope
//!
//! Everything between the platform client and the report writers: listing
//! loaders, assignment and completion resolution, the capacity audit, and
//! member email resolution. Each service takes the platform as a trait so
//! tests can substitute an in-memory fixture.

pub mod assignment_resolver;
pub mod capacity_auditor;
pub mod completion_tracker;
pub mod email_directory;
pub mod submission_loader;

pub use assignment_resolver::{resolve_assignments, resolve_track_chairs};
pub use capacity_auditor::{audit_capacity, CapacityReport};
pub use completion_tracker::{apply_completions, resolve_completions, CompletionResolution};
pub use email_directory::{EmailDirectory, UNKNOWN};
pub use submission_loader::{load_commitment_submissions, load_submissions, CommitmentListing};
