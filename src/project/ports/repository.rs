//! Repository port for project persistence, lookup, and membership queries.

use crate::employee::domain::EmployeeId;
use crate::project::domain::{Project, ProjectId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
///
/// Tasks and expenses cascade when a project row is deleted at the storage
/// boundary; no delete operation is exposed here because no flow in the
/// crate removes projects.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project with its team membership.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// ID already exists.
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Returns all projects system-wide.
    ///
    /// Listing is intentionally unrestricted; only task and expense intake
    /// narrows to membership.
    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>>;

    /// Returns the projects where the employee is a team member.
    ///
    /// Managers are always members, so this also covers managed projects.
    async fn list_for_member(&self, employee: EmployeeId)
    -> ProjectRepositoryResult<Vec<Project>>;
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
