//! Declared-capacity audit
//!
//! Members declare how many reviews they will take this cycle through a
//! max-load edge. The audit walks a role group, reads the first such edge
//! per member, and aggregates the declared loads into a histogram. Members
//! without an edge never responded and are skipped.

use std::collections::BTreeMap;

use chairscope_common::platform::{Platform, PlatformError};
use tracing::{debug, info};

use crate::models::Role;

/// Aggregated declared-load data for one role.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityReport {
    pub role: Role,
    /// Members listed under the role group, responders or not.
    pub total_members: usize,
    /// Declared load per responding member.
    pub declared: BTreeMap<String, i64>,
    /// Number of responding members per declared-load value.
    pub histogram: BTreeMap<i64, usize>,
    /// Sum of declared loads.
    pub total_capacity: i64,
}

impl CapacityReport {
    fn new(role: Role, total_members: usize) -> Self {
        Self {
            role,
            total_members,
            declared: BTreeMap::new(),
            histogram: BTreeMap::new(),
            total_capacity: 0,
        }
    }

    fn record(&mut self, member: &str, load: i64) {
        self.declared.insert(member.to_string(), load);
        *self.histogram.entry(load).or_insert(0) += 1;
        self.total_capacity += load;
    }

    /// Members who responded at all, including ones who declared zero.
    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }

    /// Members who declared a nonzero load.
    pub fn active_members(&self) -> usize {
        self.histogram
            .iter()
            .filter(|(load, _)| **load != 0)
            .map(|(_, count)| count)
            .sum()
    }

    /// Console summary; the capacity audit has no file output.
    pub fn print_summary(&self) {
        println!("=== {} ===", self.role);
        println!("Total members in group: {}", self.total_members);
        println!("Members who declared a max load: {}", self.declared_count());
        println!("Total declared capacity: {} reviews", self.total_capacity);
        println!("Max load histogram:");
        for (load, count) in &self.histogram {
            println!("  load {}: {} members", load, count);
        }
        println!("Active members (nonzero load): {}", self.active_members());
        println!();
    }
}

/// Audit the declared review capacity of one role group.
pub async fn audit_capacity(
    platform: &impl Platform,
    venue: &str,
    role: Role,
    max_load_suffix: &str,
) -> Result<CapacityReport, PlatformError> {
    let group = platform.get_group(&role.group_id(venue)).await?;
    info!(
        role = %role,
        members = group.members.len(),
        "Auditing declared capacity"
    );

    let invitation = role.max_load_invitation(venue, max_load_suffix);
    let mut report = CapacityReport::new(role, group.members.len());

    for member in &group.members {
        let edges = platform.get_edges(&invitation, None, Some(member)).await?;
        // first edge wins; the platform keeps at most one per member
        let Some(load) = edges.first().and_then(|edge| edge.weight) else {
            debug!(member = %member, "No declared load, skipping");
            continue;
        };
        report.record(member, load.round() as i64);
    }

    Ok(report)
}
