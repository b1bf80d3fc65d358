//! Repository port for employee profile persistence and lookup.

use crate::employee::domain::{Employee, EmployeeId, PrincipalId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for employee repository operations.
pub type EmployeeRepositoryResult<T> = Result<T, EmployeeRepositoryError>;

/// Employee profile persistence contract.
///
/// Profile rows referenced by projects, tasks, expenses, and orders carry
/// cascade-on-delete foreign keys at the storage boundary; no delete
/// operation is exposed here because no flow in the crate removes profiles.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Stores a new employee profile.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeRepositoryError::DuplicateEmployee`] when the
    /// profile ID already exists or
    /// [`EmployeeRepositoryError::DuplicatePrincipal`] when the principal is
    /// already bound to a profile.
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()>;

    /// Finds a profile by internal identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Finds the profile bound to the given principal.
    ///
    /// Returns `None` when the principal has no profile.
    async fn find_by_principal(
        &self,
        principal: PrincipalId,
    ) -> EmployeeRepositoryResult<Option<Employee>>;

    /// Returns all employee profiles.
    ///
    /// Used to populate team-member pickers; the caller excludes the
    /// requester when rendering.
    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>>;
}

/// Errors returned by employee repository implementations.
#[derive(Debug, Clone, Error)]
pub enum EmployeeRepositoryError {
    /// A profile with the same identifier already exists.
    #[error("duplicate employee identifier: {0}")]
    DuplicateEmployee(EmployeeId),

    /// The principal is already bound to a profile.
    #[error("principal already bound to a profile: {0}")]
    DuplicatePrincipal(PrincipalId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl EmployeeRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
