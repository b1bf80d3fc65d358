//! Service orchestration tests for eligibility-gated task intake.

use std::sync::Arc;

use crate::employee::domain::EmployeeId;
use crate::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{ProjectId, ProjectStatus},
    ports::ProjectRepository,
    services::{CreateProjectRequest, ProjectPlanningService},
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPriority, TaskStatus},
    services::{CreateTaskRequest, TaskIntakeError, TaskIntakeService},
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type IntakeService =
    TaskIntakeService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>;

struct Harness {
    projects: Arc<InMemoryProjectRepository>,
    service: IntakeService,
}

#[fixture]
fn harness() -> Harness {
    let projects = Arc::new(InMemoryProjectRepository::new());
    let service = TaskIntakeService::new(
        Arc::clone(&projects),
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    Harness { projects, service }
}

async fn seed_project(projects: &Arc<InMemoryProjectRepository>, manager: EmployeeId) -> ProjectId {
    let planning = ProjectPlanningService::new(Arc::clone(projects));
    let request = CreateProjectRequest::new(
        "Launch",
        "Product launch",
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
        NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
        ProjectStatus::Planning,
    );
    planning
        .create_project(request, manager)
        .await
        .expect("project creation should succeed")
        .id()
}

fn task_request(project: ProjectId) -> CreateTaskRequest {
    CreateTaskRequest::new(
        "Book venue",
        "Reserve the launch venue",
        project,
        NaiveDate::from_ymd_opt(2025, 4, 15).expect("valid date"),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_assigns_to_requester(harness: Harness) {
    let requester = EmployeeId::new();
    let project = seed_project(&harness.projects, requester).await;

    let task = harness
        .service
        .create_task(
            task_request(project).with_priority(TaskPriority::High),
            requester,
        )
        .await
        .expect("task creation should succeed");

    assert_eq!(task.assigned_to(), requester);
    assert_eq!(task.project(), project);
    assert_eq!(task.priority(), TaskPriority::High);
    assert_eq!(task.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_ineligible_project(harness: Harness) {
    let owner = EmployeeId::new();
    let outsider = EmployeeId::new();
    let project = seed_project(&harness.projects, owner).await;

    let result = harness
        .service
        .create_task(task_request(project), outsider)
        .await;

    assert!(matches!(
        result,
        Err(TaskIntakeError::ProjectNotEligible { employee, project: p })
            if employee == outsider && p == project
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_project(harness: Harness) {
    let requester = EmployeeId::new();
    let missing = ProjectId::new();

    let result = harness
        .service
        .create_task(task_request(missing), requester)
        .await;

    assert!(matches!(
        result,
        Err(TaskIntakeError::ProjectNotFound(id)) if id == missing
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_allows_plain_team_members(harness: Harness) {
    let owner = EmployeeId::new();
    let member = EmployeeId::new();
    let planning = ProjectPlanningService::new(Arc::clone(&harness.projects));
    let project = planning
        .create_project(
            CreateProjectRequest::new(
                "Launch",
                "Product launch",
                NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date"),
                NaiveDate::from_ymd_opt(2025, 9, 30).expect("valid date"),
                ProjectStatus::Planning,
            )
            .with_team_members([member]),
            owner,
        )
        .await
        .expect("project creation should succeed");

    let task = harness
        .service
        .create_task(task_request(project.id()), member)
        .await
        .expect("member task creation should succeed");
    assert_eq!(task.assigned_to(), member);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_assigned_filters_to_requester(harness: Harness) {
    let first = EmployeeId::new();
    let second = EmployeeId::new();
    let project = seed_project(&harness.projects, first).await;
    let shared = harness
        .projects
        .find_by_id(project)
        .await
        .expect("lookup should succeed")
        .expect("project should exist");
    // Second employee joins via a fresh project they manage themselves.
    let own_project = seed_project(&harness.projects, second).await;

    harness
        .service
        .create_task(task_request(shared.id()), first)
        .await
        .expect("task creation should succeed");
    harness
        .service
        .create_task(task_request(own_project), second)
        .await
        .expect("task creation should succeed");

    let mine = harness
        .service
        .list_assigned(first)
        .await
        .expect("listing should succeed");
    assert_eq!(mine.len(), 1);
    assert!(mine.iter().all(|task| task.assigned_to() == first));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_assigned_excludes_finished_work_and_truncates(harness: Harness) {
    let requester = EmployeeId::new();
    let project = seed_project(&harness.projects, requester).await;

    for status in [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
        TaskStatus::Todo,
    ] {
        harness
            .service
            .create_task(task_request(project).with_status(status), requester)
            .await
            .expect("task creation should succeed");
    }

    let open = harness
        .service
        .open_assigned(requester, 2)
        .await
        .expect("listing should succeed");

    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|task| task.status().is_open()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_task_reports_missing_identifier(harness: Harness) {
    let missing = TaskId::new();
    let result = harness.service.find_task(missing).await;
    assert!(matches!(
        result,
        Err(TaskIntakeError::NotFound(id)) if id == missing
    ));
}
