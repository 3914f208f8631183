//! Members, roles, and per-role rosters
//!
//! The platform organizes people into role groups under a venue id
//! (`<venue>/Reviewers` and friends) and expresses both assignments and
//! declared loads as edges against invitations derived from those group
//! names. [`Role`] owns that naming scheme so the rest of the pipeline never
//! formats a group id by hand.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Assignable member roles, named the way the platform names their groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    SeniorAreaChairs,
    AreaChairs,
    Reviewers,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SeniorAreaChairs, Role::AreaChairs, Role::Reviewers];

    /// Group-name segment used in platform ids and invitations.
    pub fn group_name(self) -> &'static str {
        match self {
            Role::SeniorAreaChairs => "Senior_Area_Chairs",
            Role::AreaChairs => "Area_Chairs",
            Role::Reviewers => "Reviewers",
        }
    }

    /// Full group id under a venue, e.g. `<venue>/Area_Chairs`.
    pub fn group_id(self, venue: &str) -> String {
        format!("{}/{}", venue, self.group_name())
    }

    /// Assignment-edge invitation for this role under a venue.
    pub fn assignment_invitation(self, venue: &str) -> String {
        format!("{}/{}/-/Assignment", venue, self.group_name())
    }

    /// Declared-load edge invitation for this role under a venue. The
    /// suffix is venue configuration (`Custom_Max_Papers` by default).
    pub fn max_load_invitation(self, venue: &str, suffix: &str) -> String {
        format!("{}/{}/-/{}", venue, self.group_name(), suffix)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}

/// One person in one role, with the papers resolved against them so far.
#[derive(Debug, Clone)]
pub struct Member {
    pub id: String,
    /// Submission numbers this member is assigned to.
    pub assigned: BTreeSet<u64>,
    /// Submission numbers this member has completed a review for.
    pub completed: BTreeSet<u64>,
}

impl Member {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            assigned: BTreeSet::new(),
            completed: BTreeSet::new(),
        }
    }
}

/// Member index for one role, grown while edges and groups are resolved.
///
/// Members appear here the first time anything references them; there is no
/// separate registration step, and completions may arrive for members that
/// never had an assignment edge.
#[derive(Debug, Default)]
pub struct MemberRoster {
    members: BTreeMap<String, Member>,
}

impl MemberRoster {
    /// Existing entry for `id`, or a fresh one inserted on the spot.
    pub fn get_or_create(&mut self, id: &str) -> &mut Member {
        self.members
            .entry(id.to_string())
            .or_insert_with(|| Member::new(id))
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.contains_key(id)
    }

    pub fn record_assignment(&mut self, id: &str, number: u64) {
        self.get_or_create(id).assigned.insert(number);
    }

    pub fn record_completion(&mut self, id: &str, number: u64) {
        self.get_or_create(id).completed.insert(number);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member ids in lexicographic order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(id, m)| (id.as_str(), m))
    }
}

/// One roster per assignable role.
#[derive(Debug, Default)]
pub struct AssignmentRosters {
    pub sac: MemberRoster,
    pub ac: MemberRoster,
    pub reviewers: MemberRoster,
}

impl AssignmentRosters {
    pub fn roster(&self, role: Role) -> &MemberRoster {
        match role {
            Role::SeniorAreaChairs => &self.sac,
            Role::AreaChairs => &self.ac,
            Role::Reviewers => &self.reviewers,
        }
    }

    pub fn roster_mut(&mut self, role: Role) -> &mut MemberRoster {
        match role {
            Role::SeniorAreaChairs => &mut self.sac,
            Role::AreaChairs => &mut self.ac,
            Role::Reviewers => &mut self.reviewers,
        }
    }

    /// Every member id seen in any roster, deduplicated and sorted. This is
    /// the id set the email directory resolves in one go.
    pub fn all_ids(&self) -> Vec<String> {
        let mut ids = BTreeSet::new();
        for role in Role::ALL {
            ids.extend(self.roster(role).ids().map(str::to_string));
        }
        ids.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_naming_matches_platform_conventions() {
        let venue = "aclweb.org/ACL/ARR/2023/December";
        assert_eq!(
            Role::SeniorAreaChairs.group_id(venue),
            "aclweb.org/ACL/ARR/2023/December/Senior_Area_Chairs"
        );
        assert_eq!(
            Role::Reviewers.assignment_invitation(venue),
            "aclweb.org/ACL/ARR/2023/December/Reviewers/-/Assignment"
        );
        assert_eq!(
            Role::AreaChairs.max_load_invitation(venue, "Custom_Max_Papers"),
            "aclweb.org/ACL/ARR/2023/December/Area_Chairs/-/Custom_Max_Papers"
        );
    }

    #[test]
    fn get_or_create_reuses_existing_entries() {
        let mut roster = MemberRoster::default();
        roster.record_assignment("~Reviewer_One1", 4);
        roster.record_assignment("~Reviewer_One1", 9);
        roster.record_completion("~Reviewer_One1", 4);
        assert_eq!(roster.len(), 1);
        let member = roster.get("~Reviewer_One1").unwrap();
        assert_eq!(member.assigned.len(), 2);
        assert_eq!(member.completed.len(), 1);
    }

    #[test]
    fn completion_without_assignment_creates_the_member() {
        let mut roster = MemberRoster::default();
        roster.record_completion("~Ghost_Reviewer1", 2);
        assert!(roster.contains("~Ghost_Reviewer1"));
        let member = roster.get("~Ghost_Reviewer1").unwrap();
        assert!(member.assigned.is_empty());
        assert_eq!(member.completed.len(), 1);
    }

    #[test]
    fn all_ids_deduplicates_across_rosters() {
        let mut rosters = AssignmentRosters::default();
        rosters.sac.record_assignment("~Chair_A1", 1);
        rosters.ac.record_assignment("~Chair_A1", 1);
        rosters.reviewers.record_assignment("~Reviewer_B1", 1);
        assert_eq!(rosters.all_ids(), vec!["~Chair_A1", "~Reviewer_B1"]);
    }
}
