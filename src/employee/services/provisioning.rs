//! Service layer for principal authorization and profile auto-provisioning.

use crate::employee::{
    domain::{Employee, EmployeeId, PrincipalId},
    ports::{EmployeeRepository, EmployeeRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Access-control failures raised while resolving a principal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No authenticated principal accompanies the request.
    #[error("request is not authenticated")]
    NotAuthenticated,

    /// The principal has no employee profile.
    ///
    /// Raised only by bare profile lookup; the [`ProvisioningService::authorize`]
    /// guard converts this condition into provisioning instead.
    #[error("principal {0} has no employee profile")]
    NotProvisioned(PrincipalId),
}

/// Service-level errors for identity binding operations.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// Access control rejected the request.
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

/// Result type for identity binding operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Identity binding and auto-provisioning service.
///
/// [`ProvisioningService::authorize`] is the single guard every gated
/// operation passes through before touching projects, tasks, expenses, or
/// orders.
#[derive(Clone)]
pub struct ProvisioningService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProvisioningService<R, C>
where
    R: EmployeeRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new provisioning service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Resolves an optional principal to an employee profile, provisioning
    /// a default profile when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotAuthenticated`] when no principal is given,
    /// or a repository error when persistence fails.
    pub async fn authorize(
        &self,
        principal: Option<PrincipalId>,
    ) -> ProvisioningResult<Employee> {
        let principal = principal.ok_or(AccessError::NotAuthenticated)?;
        self.ensure_employee(principal).await
    }

    /// Returns the profile bound to the principal, creating the default
    /// profile on first contact.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Repository`] when persistence fails.
    pub async fn ensure_employee(&self, principal: PrincipalId) -> ProvisioningResult<Employee> {
        if let Some(existing) = self.repository.find_by_principal(principal).await? {
            return Ok(existing);
        }

        let employee = Employee::provisioned(principal, &*self.clock);
        match self.repository.store(&employee).await {
            Ok(()) => {
                tracing::info!(
                    %principal,
                    employee = %employee.id(),
                    "auto-provisioned employee profile"
                );
                Ok(employee)
            }
            Err(EmployeeRepositoryError::DuplicatePrincipal(_)) => {
                // Lost a concurrent provisioning race; the stored row wins.
                let stored = self.repository.find_by_principal(principal).await?;
                stored.ok_or_else(|| {
                    EmployeeRepositoryError::DuplicatePrincipal(principal).into()
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Returns the profile bound to the principal without provisioning.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotProvisioned`] when the principal has no
    /// profile, or a repository error when persistence fails.
    pub async fn profile(&self, principal: PrincipalId) -> ProvisioningResult<Employee> {
        let found = self.repository.find_by_principal(principal).await?;
        found.ok_or_else(|| AccessError::NotProvisioned(principal).into())
    }

    /// Returns all employee profiles for member pickers and directories.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Repository`] when persistence fails.
    pub async fn directory(&self) -> ProvisioningResult<Vec<Employee>> {
        Ok(self.repository.list_all().await?)
    }

    /// Returns the profiles offered as team-member candidates to a project
    /// creator: everyone except the requester, who joins as manager
    /// automatically and cannot be re-added by hand.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Repository`] when persistence fails.
    pub async fn member_candidates(
        &self,
        requester: EmployeeId,
    ) -> ProvisioningResult<Vec<Employee>> {
        let mut candidates = self.repository.list_all().await?;
        candidates.retain(|employee| employee.id() != requester);
        Ok(candidates)
    }
}
