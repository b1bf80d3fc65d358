//! Service layer for project detail reporting.

use crate::expense::ports::{ExpenseRepository, ExpenseRepositoryError};
use crate::project::{
    domain::{ProjectId, ProjectSummary},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for project reporting operations.
#[derive(Debug, Error)]
pub enum ProjectReportingError {
    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Expense repository operation failed.
    #[error(transparent)]
    Expenses(#[from] ExpenseRepositoryError),
}

/// Result type for project reporting operations.
pub type ProjectReportingResult<T> = Result<T, ProjectReportingError>;

/// Project reporting service deriving detail figures from owned records.
#[derive(Clone)]
pub struct ProjectReportingService<P, T, E>
where
    P: ProjectRepository,
    T: TaskRepository,
    E: ExpenseRepository,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    expenses: Arc<E>,
}

impl<P, T, E> ProjectReportingService<P, T, E>
where
    P: ProjectRepository,
    T: TaskRepository,
    E: ExpenseRepository,
{
    /// Creates a new project reporting service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, expenses: Arc<E>) -> Self {
        Self {
            projects,
            tasks,
            expenses,
        }
    }

    /// Returns the project with its derived task counts and expense total.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectReportingError::NotFound`] when the project does not
    /// exist, or a repository error when persistence fails.
    pub async fn project_summary(&self, id: ProjectId) -> ProjectReportingResult<ProjectSummary> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or(ProjectReportingError::NotFound(id))?;
        let tasks = self.tasks.list_by_project(id).await?;
        let expenses = self.expenses.list_by_project(id).await?;
        Ok(ProjectSummary::from_parts(project, &tasks, &expenses))
    }
}
