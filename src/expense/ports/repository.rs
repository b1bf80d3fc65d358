//! Repository port for expense persistence and lookup.

use crate::employee::domain::EmployeeId;
use crate::expense::domain::{Expense, ExpenseId};
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for expense repository operations.
pub type ExpenseRepositoryResult<T> = Result<T, ExpenseRepositoryError>;

/// Expense persistence contract.
///
/// Expense rows cascade when their project or submitter row is deleted at
/// the storage boundary.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Stores a new expense submission.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseRepositoryError::DuplicateExpense`] when the
    /// expense ID already exists.
    async fn store(&self, expense: &Expense) -> ExpenseRepositoryResult<()>;

    /// Finds an expense by identifier.
    ///
    /// Returns `None` when the expense does not exist.
    async fn find_by_id(&self, id: ExpenseId) -> ExpenseRepositoryResult<Option<Expense>>;

    /// Returns the expenses submitted by the given employee.
    async fn list_submitted(&self, employee: EmployeeId)
    -> ExpenseRepositoryResult<Vec<Expense>>;

    /// Returns the expenses charged to the given project.
    async fn list_by_project(&self, project: ProjectId) -> ExpenseRepositoryResult<Vec<Expense>>;
}

/// Errors returned by expense repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ExpenseRepositoryError {
    /// An expense with the same identifier already exists.
    #[error("duplicate expense identifier: {0}")]
    DuplicateExpense(ExpenseId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ExpenseRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
