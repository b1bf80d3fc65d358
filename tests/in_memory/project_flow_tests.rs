//! Project creation, visibility, and reporting scenarios.

use crate::in_memory::helpers::{Erp, date, erp, launch_project, runtime};
use atrium::employee::domain::PrincipalId;
use atrium::expense::services::CreateExpenseRequest;
use atrium::task::domain::TaskStatus;
use atrium::task::services::CreateTaskRequest;
use rstest::rstest;
use rust_decimal::Decimal;
use std::io;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn login(rt: &Runtime, erp: &Erp) -> atrium::employee::domain::Employee {
    rt.block_on(
        erp.employees
            .authorize(Some(PrincipalId::from_uuid(Uuid::new_v4()))),
    )
    .expect("authorization should provision")
}

/// Tests the canonical creation scenario: an empty submitted member set
/// still yields a team containing the creator.
#[rstest]
fn creator_becomes_manager_and_sole_member(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);

    let project = rt
        .block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    assert_eq!(project.manager(), alice.id());
    assert_eq!(project.team_members().len(), 1);
    assert!(project.team_members().contains(&alice.id()));
}

/// Tests that the project list is visible to non-members while intake
/// eligibility stays restricted.
#[rstest]
fn listing_is_global_but_eligibility_is_membership(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let bob = login(&rt, &erp);

    rt.block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let visible_to_bob = rt
        .block_on(erp.projects.list_projects())
        .expect("listing should succeed");
    let eligible_for_bob = rt
        .block_on(erp.projects.eligible_for(bob.id()))
        .expect("eligibility should succeed");

    assert_eq!(visible_to_bob.len(), 1);
    assert!(eligible_for_bob.is_empty());
}

/// Tests the project detail: counts derive from task statuses and the
/// total from summed expense amounts.
#[rstest]
fn detail_reports_task_counts_and_expense_total(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let project = rt
        .block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let due = date(2025, 4, 15);
    for status in [TaskStatus::Done, TaskStatus::InProgress, TaskStatus::Todo] {
        rt.block_on(erp.tasks.create_task(
            CreateTaskRequest::new("Prepare launch", "Checklist", project.id(), due)
                .with_status(status),
            alice.id(),
        ))
        .expect("task creation should succeed");
    }
    for (cents, day) in [(12_500_i64, 3), (9_950, 11)] {
        rt.block_on(erp.expenses.create_expense(
            CreateExpenseRequest::new(
                project.id(),
                "Venue deposit",
                Decimal::new(cents, 2),
                date(2025, 4, day),
            ),
            alice.id(),
        ))
        .expect("expense creation should succeed");
    }

    let summary = rt
        .block_on(erp.reporting.project_summary(project.id()))
        .expect("summary should succeed");

    assert_eq!(summary.completed_tasks(), 1);
    assert_eq!(summary.in_progress_tasks(), 1);
    assert_eq!(summary.total_expenses(), Decimal::new(22_450, 2));
}

/// Tests the dashboard listing: member projects only.
#[rstest]
fn member_listing_excludes_unjoined_projects(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let bob = login(&rt, &erp);

    rt.block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let bobs = rt
        .block_on(erp.projects.list_for_member(bob.id()))
        .expect("member listing should succeed");
    assert!(bobs.is_empty());
}
