//! Service layer for eligibility-gated task creation and lookup.

use crate::employee::domain::EmployeeId;
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{NewTaskData, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// The assignee is not part of the payload: tasks are always assigned to
/// the requesting employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    project: ProjectId,
    due_date: NaiveDate,
    status: TaskStatus,
    priority: TaskPriority,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        project: ProjectId,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            project,
            due_date,
            status: TaskStatus::Todo,
            priority: TaskPriority::default(),
        }
    }

    /// Sets the initial lifecycle status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// Service-level errors for task intake operations.
#[derive(Debug, Error)]
pub enum TaskIntakeError {
    /// The referenced project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// The requester is neither a member nor the manager of the project.
    #[error("employee {employee} is not eligible for project {project}")]
    ProjectNotEligible {
        /// Requesting employee.
        employee: EmployeeId,
        /// Submitted project.
        project: ProjectId,
    },

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),

    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task intake operations.
pub type TaskIntakeResult<T> = Result<T, TaskIntakeError>;

/// Task intake orchestration service.
#[derive(Clone)]
pub struct TaskIntakeService<P, R, C>
where
    P: ProjectRepository,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<P, R, C> TaskIntakeService<P, R, C>
where
    P: ProjectRepository,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task intake service.
    #[must_use]
    pub const fn new(projects: Arc<P>, repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            projects,
            repository,
            clock,
        }
    }

    /// Creates a task on an eligible project, assigned to the requester.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::ProjectNotFound`] when the project does
    /// not exist, [`TaskIntakeError::ProjectNotEligible`] when the requester
    /// is neither member nor manager, or a domain/repository error when
    /// validation or persistence fails.
    pub async fn create_task(
        &self,
        request: CreateTaskRequest,
        requester: EmployeeId,
    ) -> TaskIntakeResult<Task> {
        let project = self
            .projects
            .find_by_id(request.project)
            .await?
            .ok_or(TaskIntakeError::ProjectNotFound(request.project))?;
        if !project.involves(requester) {
            tracing::warn!(
                employee = %requester,
                project = %project.id(),
                "rejected task intake for ineligible project"
            );
            return Err(TaskIntakeError::ProjectNotEligible {
                employee: requester,
                project: project.id(),
            });
        }

        let task = Task::new(
            NewTaskData {
                title: request.title,
                description: request.description,
                project: request.project,
                assigned_to: requester,
                due_date: request.due_date,
                status: request.status,
                priority: request.priority,
            },
            &*self.clock,
        )?;
        self.repository.store(&task).await?;
        tracing::debug!(task = %task.id(), project = %task.project(), "created task");
        Ok(task)
    }

    /// Returns the tasks assigned to the employee.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Repository`] when persistence fails.
    pub async fn list_assigned(&self, employee: EmployeeId) -> TaskIntakeResult<Vec<Task>> {
        Ok(self.repository.list_assigned(employee).await?)
    }

    /// Returns up to `limit` open tasks (todo or in progress) assigned to
    /// the employee, for dashboard panels.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Repository`] when persistence fails.
    pub async fn open_assigned(
        &self,
        employee: EmployeeId,
        limit: usize,
    ) -> TaskIntakeResult<Vec<Task>> {
        let mut tasks = self.repository.list_assigned(employee).await?;
        tasks.retain(|task| task.status().is_open());
        tasks.truncate(limit);
        Ok(tasks)
    }

    /// Returns the task with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::NotFound`] when the task does not exist,
    /// or a repository error when persistence fails.
    pub async fn find_task(&self, id: TaskId) -> TaskIntakeResult<Task> {
        let task = self.repository.find_by_id(id).await?;
        task.ok_or(TaskIntakeError::NotFound(id))
    }
}
