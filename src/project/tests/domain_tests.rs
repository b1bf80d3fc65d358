//! Domain-focused tests for the project aggregate and status mapping.

use crate::employee::domain::EmployeeId;
use crate::project::domain::{
    PersistedProjectData, Project, ProjectDomainError, ProjectId, ProjectStatus, status_tag,
};
use chrono::NaiveDate;
use rstest::rstest;
use std::collections::BTreeSet;

fn dates() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
    )
}

#[rstest]
fn new_inserts_manager_into_empty_member_set() {
    let manager = EmployeeId::new();
    let (start, end) = dates();
    let project = Project::new(
        "Launch",
        "Product launch",
        start,
        end,
        ProjectStatus::Planning,
        manager,
        [],
    )
    .expect("valid project");

    assert_eq!(project.manager(), manager);
    assert!(project.team_members().contains(&manager));
    assert_eq!(project.team_members().len(), 1);
}

#[rstest]
fn new_unions_manager_with_submitted_members() {
    let manager = EmployeeId::new();
    let colleague = EmployeeId::new();
    let (start, end) = dates();
    let project = Project::new(
        "Launch",
        "Product launch",
        start,
        end,
        ProjectStatus::Planning,
        manager,
        [colleague, manager],
    )
    .expect("valid project");

    // Submitting the manager twice is harmless; the set stays a set.
    assert_eq!(project.team_members().len(), 2);
    assert!(project.team_members().contains(&manager));
    assert!(project.team_members().contains(&colleague));
}

#[rstest]
fn new_accepts_inverted_date_range() {
    // Date ordering is not validated; this pins the accepted gap.
    let (start, end) = dates();
    let project = Project::new(
        "Launch",
        "Product launch",
        end,
        start,
        ProjectStatus::Planning,
        EmployeeId::new(),
        [],
    );
    assert!(project.is_ok());
}

#[rstest]
#[case("", ProjectDomainError::BlankName)]
#[case("   ", ProjectDomainError::BlankName)]
fn new_rejects_blank_name(#[case] name: &str, #[case] expected: ProjectDomainError) {
    let (start, end) = dates();
    let result = Project::new(
        name,
        "Product launch",
        start,
        end,
        ProjectStatus::Planning,
        EmployeeId::new(),
        [],
    );
    assert_eq!(result.expect_err("blank name should be rejected"), expected);
}

#[rstest]
fn new_rejects_blank_description() {
    let (start, end) = dates();
    let result = Project::new(
        "Launch",
        "  ",
        start,
        end,
        ProjectStatus::Planning,
        EmployeeId::new(),
        [],
    );
    assert_eq!(
        result.expect_err("blank description should be rejected"),
        ProjectDomainError::BlankDescription
    );
}

#[rstest]
fn from_persisted_heals_member_set_missing_manager() {
    let manager = EmployeeId::new();
    let (start, end) = dates();
    let project = Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(),
        name: "Launch".to_owned(),
        description: "Product launch".to_owned(),
        start_date: start,
        end_date: end,
        status: ProjectStatus::InProgress,
        manager,
        team_members: BTreeSet::new(),
    });

    assert!(project.team_members().contains(&manager));
}

#[rstest]
fn involves_covers_manager_and_members_only() {
    let manager = EmployeeId::new();
    let member = EmployeeId::new();
    let outsider = EmployeeId::new();
    let (start, end) = dates();
    let project = Project::new(
        "Launch",
        "Product launch",
        start,
        end,
        ProjectStatus::Planning,
        manager,
        [member],
    )
    .expect("valid project");

    assert!(project.involves(manager));
    assert!(project.involves(member));
    assert!(!project.involves(outsider));
}

#[rstest]
#[case(ProjectStatus::Planning, "info")]
#[case(ProjectStatus::InProgress, "primary")]
#[case(ProjectStatus::Completed, "success")]
#[case(ProjectStatus::OnHold, "warning")]
fn status_tags_match_presentation_table(#[case] status: ProjectStatus, #[case] expected: &str) {
    assert_eq!(status.tag(), expected);
    assert_eq!(status_tag(status.as_str()), expected);
}

#[rstest]
#[case("archived")]
#[case("")]
#[case("PLANNINGISH")]
fn status_tag_falls_back_to_secondary(#[case] raw: &str) {
    assert_eq!(status_tag(raw), "secondary");
}

#[rstest]
fn status_serializes_to_storage_form() {
    let value = serde_json::to_value(ProjectStatus::InProgress).expect("status should serialize");
    assert_eq!(value, serde_json::json!("in_progress"));
}

#[rstest]
fn status_round_trips_through_storage_form() {
    for status in [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ] {
        assert_eq!(
            ProjectStatus::try_from(status.as_str()).expect("storage form should parse"),
            status
        );
    }
}
