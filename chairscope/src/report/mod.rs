//! Report formatting and export
//!
//! Two file exports (urgent papers, senior-chair recommendations), both
//! tab-separated with a single header row, plus console summaries. Free-text
//! columns pass through [`sanitize_field`] so a multi-line abstract or an
//! embedded tab cannot break the one-row-per-record contract.

pub mod progress;
pub mod recommendation;
pub mod urgent;

pub use progress::ProgressStats;
pub use recommendation::{
    classify, write_recommendation_report, ExportEligibility, RecommendationSummary,
};
pub use urgent::write_urgent_report;

/// Collapse tabs and line breaks to single spaces.
pub fn sanitize_field(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(&['\n', '\r', '\t'][..], " ")
}
