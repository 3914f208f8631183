//! Capacity audit tests

mod helpers;

use chairscope::models::Role;
use chairscope::services::audit_capacity;
use chairscope_common::platform::PlatformError;
use helpers::FixturePlatform;

const VENUE: &str = "conf.org/Cycle/2024";
const MAX_LOAD: &str = "Custom_Max_Papers";

#[tokio::test]
async fn histogram_totals_and_active_members() {
    let mut platform = FixturePlatform::new();
    platform.add_group(
        "conf.org/Cycle/2024/Reviewers",
        &["~Rev_A1", "~Rev_B1", "~Rev_C1", "~Rev_D1"],
    );
    let invitation = "conf.org/Cycle/2024/Reviewers/-/Custom_Max_Papers";
    let group = "conf.org/Cycle/2024/Reviewers";
    platform.add_edge(invitation, group, "~Rev_A1", Some(0.0));
    platform.add_edge(invitation, group, "~Rev_B1", Some(3.0));
    platform.add_edge(invitation, group, "~Rev_C1", Some(3.0));
    // ~Rev_D1 never declared a load

    let report = audit_capacity(&platform, VENUE, Role::Reviewers, MAX_LOAD)
        .await
        .unwrap();

    assert_eq!(report.total_members, 4);
    assert_eq!(report.declared_count(), 3);
    assert_eq!(report.total_capacity, 6);
    assert_eq!(report.histogram.get(&0), Some(&1));
    assert_eq!(report.histogram.get(&3), Some(&2));
    assert_eq!(report.active_members(), 2);
}

#[tokio::test]
async fn repeated_audits_of_frozen_data_agree() {
    let mut platform = FixturePlatform::new();
    platform.add_group("conf.org/Cycle/2024/Reviewers", &["~Rev_A1", "~Rev_B1"]);
    let invitation = "conf.org/Cycle/2024/Reviewers/-/Custom_Max_Papers";
    platform.add_edge(invitation, "conf.org/Cycle/2024/Reviewers", "~Rev_A1", Some(4.0));
    platform.add_edge(invitation, "conf.org/Cycle/2024/Reviewers", "~Rev_B1", Some(2.0));

    let first = audit_capacity(&platform, VENUE, Role::Reviewers, MAX_LOAD)
        .await
        .unwrap();
    let second = audit_capacity(&platform, VENUE, Role::Reviewers, MAX_LOAD)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_role_group_aborts_the_audit() {
    let platform = FixturePlatform::new();
    let err = audit_capacity(&platform, VENUE, Role::AreaChairs, MAX_LOAD)
        .await
        .unwrap_err();
    assert!(matches!(err, PlatformError::GroupNotFound(_)));
}

#[tokio::test]
async fn fractional_loads_round_to_nearest() {
    let mut platform = FixturePlatform::new();
    platform.add_group("conf.org/Cycle/2024/Area_Chairs", &["~Ac_A1"]);
    platform.add_edge(
        "conf.org/Cycle/2024/Area_Chairs/-/Custom_Max_Papers",
        "conf.org/Cycle/2024/Area_Chairs",
        "~Ac_A1",
        Some(2.6),
    );

    let report = audit_capacity(&platform, VENUE, Role::AreaChairs, MAX_LOAD)
        .await
        .unwrap();
    assert_eq!(report.total_capacity, 3);
    assert_eq!(report.histogram.get(&3), Some(&1));
}

#[tokio::test]
async fn edges_without_weight_are_skipped() {
    let mut platform = FixturePlatform::new();
    platform.add_group("conf.org/Cycle/2024/Reviewers", &["~Rev_A1"]);
    platform.add_edge(
        "conf.org/Cycle/2024/Reviewers/-/Custom_Max_Papers",
        "conf.org/Cycle/2024/Reviewers",
        "~Rev_A1",
        None,
    );

    let report = audit_capacity(&platform, VENUE, Role::Reviewers, MAX_LOAD)
        .await
        .unwrap();
    assert_eq!(report.declared_count(), 0);
    assert_eq!(report.total_capacity, 0);
}
