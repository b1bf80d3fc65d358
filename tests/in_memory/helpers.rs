//! Shared test helpers for in-memory integration tests.

use atrium::employee::{
    adapters::memory::InMemoryEmployeeRepository, services::ProvisioningService,
};
use atrium::expense::{
    adapters::memory::InMemoryExpenseRepository, services::ExpenseIntakeService,
};
use atrium::order::{adapters::memory::InMemoryOrderRepository, services::OrderIntakeService};
use atrium::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::ProjectStatus,
    services::{CreateProjectRequest, ProjectPlanningService, ProjectReportingService},
};
use atrium::task::{adapters::memory::InMemoryTaskRepository, services::TaskIntakeService};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Fully wired in-memory application core.
pub struct Erp {
    /// Identity binding and auto-provisioning.
    pub employees: ProvisioningService<InMemoryEmployeeRepository, DefaultClock>,
    /// Project planning and eligibility.
    pub projects: ProjectPlanningService<InMemoryProjectRepository>,
    /// Project detail reporting.
    pub reporting: ProjectReportingService<
        InMemoryProjectRepository,
        InMemoryTaskRepository,
        InMemoryExpenseRepository,
    >,
    /// Eligibility-gated task intake.
    pub tasks: TaskIntakeService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>,
    /// Eligibility-gated expense intake.
    pub expenses: ExpenseIntakeService<InMemoryProjectRepository, InMemoryExpenseRepository>,
    /// Customer order intake.
    pub orders: OrderIntakeService<InMemoryOrderRepository, DefaultClock>,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh, fully wired in-memory core for each test.
#[fixture]
pub fn erp() -> Erp {
    let clock = Arc::new(DefaultClock);
    let employee_repo = Arc::new(InMemoryEmployeeRepository::new());
    let project_repo = Arc::new(InMemoryProjectRepository::new());
    let task_repo = Arc::new(InMemoryTaskRepository::new());
    let expense_repo = Arc::new(InMemoryExpenseRepository::new());
    let order_repo = Arc::new(InMemoryOrderRepository::new());

    Erp {
        employees: ProvisioningService::new(Arc::clone(&employee_repo), Arc::clone(&clock)),
        projects: ProjectPlanningService::new(Arc::clone(&project_repo)),
        reporting: ProjectReportingService::new(
            Arc::clone(&project_repo),
            Arc::clone(&task_repo),
            Arc::clone(&expense_repo),
        ),
        tasks: TaskIntakeService::new(
            Arc::clone(&project_repo),
            Arc::clone(&task_repo),
            Arc::clone(&clock),
        ),
        expenses: ExpenseIntakeService::new(Arc::clone(&project_repo), Arc::clone(&expense_repo)),
        orders: OrderIntakeService::new(Arc::clone(&order_repo), Arc::clone(&clock)),
    }
}

/// Standard project request used across scenarios.
#[must_use]
pub fn launch_project() -> CreateProjectRequest {
    CreateProjectRequest::new(
        "Launch",
        "Product launch",
        date(2025, 3, 1),
        date(2025, 9, 30),
        ProjectStatus::Planning,
    )
}

/// Builds a calendar date, panicking on invalid input.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}
