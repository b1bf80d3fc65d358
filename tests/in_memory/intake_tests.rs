//! Eligibility-gated task and expense intake scenarios.

use crate::in_memory::helpers::{Erp, date, erp, launch_project, runtime};
use atrium::employee::domain::{Employee, PrincipalId};
use atrium::expense::domain::ExpenseStatus;
use atrium::expense::services::{CreateExpenseRequest, ExpenseIntakeError};
use atrium::task::services::{CreateTaskRequest, TaskIntakeError};
use rstest::rstest;
use rust_decimal::Decimal;
use std::io;
use tokio::runtime::Runtime;
use uuid::Uuid;

fn login(rt: &Runtime, erp: &Erp) -> Employee {
    rt.block_on(
        erp.employees
            .authorize(Some(PrincipalId::from_uuid(Uuid::new_v4()))),
    )
    .expect("authorization should provision")
}

/// Tests that an outsider's task submission on another team's project is
/// a validation failure, not a silent bypass.
#[rstest]
fn outsider_task_submission_is_rejected(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let bob = login(&rt, &erp);
    let launch = rt
        .block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let result = rt.block_on(erp.tasks.create_task(
        CreateTaskRequest::new("Book venue", "Reserve the venue", launch.id(), date(2025, 4, 15)),
        bob.id(),
    ));

    assert!(matches!(
        result,
        Err(TaskIntakeError::ProjectNotEligible { employee, .. }) if employee == bob.id()
    ));
    let bobs_tasks = rt
        .block_on(erp.tasks.list_assigned(bob.id()))
        .expect("listing should succeed");
    assert!(bobs_tasks.is_empty());
}

/// Tests that tasks land on the requester whatever the flow intended.
#[rstest]
fn tasks_are_always_assigned_to_the_requester(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let launch = rt
        .block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let task = rt
        .block_on(erp.tasks.create_task(
            CreateTaskRequest::new(
                "Book venue",
                "Reserve the venue",
                launch.id(),
                date(2025, 4, 15),
            ),
            alice.id(),
        ))
        .expect("task creation should succeed");

    assert_eq!(task.assigned_to(), alice.id());
    assert_eq!(task.created_at(), task.updated_at());
}

/// Tests that expense submissions are pending regardless of intent and
/// rejected outside the eligible set.
#[rstest]
fn expenses_are_pending_and_membership_gated(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let bob = login(&rt, &erp);
    let launch = rt
        .block_on(erp.projects.create_project(launch_project(), alice.id()))
        .expect("project creation should succeed");

    let expense = rt
        .block_on(erp.expenses.create_expense(
            CreateExpenseRequest::new(
                launch.id(),
                "Venue deposit",
                Decimal::new(12_500, 2),
                date(2025, 4, 3),
            ),
            alice.id(),
        ))
        .expect("expense creation should succeed");
    assert_eq!(expense.status(), ExpenseStatus::Pending);
    assert_eq!(expense.submitted_by(), alice.id());

    let rejected = rt.block_on(erp.expenses.create_expense(
        CreateExpenseRequest::new(
            launch.id(),
            "Venue deposit",
            Decimal::new(12_500, 2),
            date(2025, 4, 3),
        ),
        bob.id(),
    ));
    assert!(matches!(
        rejected,
        Err(ExpenseIntakeError::ProjectNotEligible { employee, .. }) if employee == bob.id()
    ));
}

/// Tests that a team member (not only the manager) passes the gate.
#[rstest]
fn team_members_pass_the_eligibility_gate(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let carol = login(&rt, &erp);
    let launch = rt
        .block_on(
            erp.projects
                .create_project(launch_project().with_team_members([carol.id()]), alice.id()),
        )
        .expect("project creation should succeed");

    let eligible = rt
        .block_on(erp.projects.eligible_for(carol.id()))
        .expect("eligibility should succeed");
    assert_eq!(eligible.len(), 1);

    let task = rt
        .block_on(erp.tasks.create_task(
            CreateTaskRequest::new(
                "Draft invitations",
                "Guest list and invitations",
                launch.id(),
                date(2025, 5, 1),
            ),
            carol.id(),
        ))
        .expect("member task creation should succeed");
    assert_eq!(task.assigned_to(), carol.id());
}

/// Tests the personal listings: each employee sees only their own
/// records.
#[rstest]
fn personal_listings_are_scoped_to_the_employee(runtime: io::Result<Runtime>, erp: Erp) {
    let rt = runtime.expect("runtime creation");
    let alice = login(&rt, &erp);
    let carol = login(&rt, &erp);
    let launch = rt
        .block_on(
            erp.projects
                .create_project(launch_project().with_team_members([carol.id()]), alice.id()),
        )
        .expect("project creation should succeed");

    for (who, title) in [(&alice, "Book venue"), (&carol, "Draft invitations")] {
        rt.block_on(erp.tasks.create_task(
            CreateTaskRequest::new(title, "Launch work", launch.id(), date(2025, 4, 15)),
            who.id(),
        ))
        .expect("task creation should succeed");
    }

    let alice_tasks = rt
        .block_on(erp.tasks.list_assigned(alice.id()))
        .expect("listing should succeed");
    assert_eq!(alice_tasks.len(), 1);
    assert_eq!(alice_tasks.first().map(|t| t.title()), Some("Book venue"));
}
