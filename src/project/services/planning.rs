//! Service layer for project creation, listing, and eligibility.

use crate::employee::domain::EmployeeId;
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectStatus, eligible_projects},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a project.
///
/// The member picker offered to the requester excludes the requester
/// itself; whatever set arrives, the requester is inserted as manager and
/// member during creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
    team_members: Vec<EmployeeId>,
}

impl CreateProjectRequest {
    /// Creates a request with required project fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ProjectStatus,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            start_date,
            end_date,
            status,
            team_members: Vec::new(),
        }
    }

    /// Sets the submitted team-member set.
    #[must_use]
    pub fn with_team_members(mut self, members: impl IntoIterator<Item = EmployeeId>) -> Self {
        self.team_members = members.into_iter().collect();
        self
    }
}

/// Service-level errors for project planning operations.
#[derive(Debug, Error)]
pub enum ProjectPlanningError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project planning operations.
pub type ProjectPlanningResult<T> = Result<T, ProjectPlanningError>;

/// Project planning orchestration service.
#[derive(Clone)]
pub struct ProjectPlanningService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectPlanningService<R>
where
    R: ProjectRepository,
{
    /// Creates a new project planning service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a project managed by the requester.
    ///
    /// The requester becomes manager and is inserted into the team-member
    /// set regardless of the submitted set.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPlanningError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
        requester: EmployeeId,
    ) -> ProjectPlanningResult<Project> {
        let project = Project::new(
            request.name,
            request.description,
            request.start_date,
            request.end_date,
            request.status,
            requester,
            request.team_members,
        )?;
        self.repository.store(&project).await?;
        tracing::info!(
            project = %project.id(),
            manager = %requester,
            members = project.team_members().len(),
            "created project"
        );
        Ok(project)
    }

    /// Returns all projects system-wide.
    ///
    /// Listing is intentionally unrestricted: every employee sees every
    /// project here, while task and expense intake stays membership-gated.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPlanningError::Repository`] when persistence fails.
    pub async fn list_projects(&self) -> ProjectPlanningResult<Vec<Project>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the projects where the employee is a team member.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPlanningError::Repository`] when persistence fails.
    pub async fn list_for_member(
        &self,
        employee: EmployeeId,
    ) -> ProjectPlanningResult<Vec<Project>> {
        Ok(self.repository.list_for_member(employee).await?)
    }

    /// Returns the projects eligible for the employee's task and expense
    /// intake: membership or management, deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectPlanningError::Repository`] when persistence fails.
    pub async fn eligible_for(&self, employee: EmployeeId) -> ProjectPlanningResult<Vec<Project>> {
        let projects = self.repository.list_all().await?;
        Ok(eligible_projects(employee, projects))
    }
}
