//! Service layer for eligibility-gated expense submission and lookup.

use crate::employee::domain::EmployeeId;
use crate::expense::{
    domain::{Expense, ExpenseDomainError, ExpenseId, NewExpenseData},
    ports::{ExpenseRepository, ExpenseRepositoryError},
};
use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for submitting an expense.
///
/// Neither the submitter nor the status is part of the payload: the
/// submitter is always the requesting employee and new submissions are
/// always pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateExpenseRequest {
    project: ProjectId,
    description: String,
    amount: Decimal,
    date: NaiveDate,
}

impl CreateExpenseRequest {
    /// Creates a request with required expense fields.
    #[must_use]
    pub fn new(
        project: ProjectId,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            project,
            description: description.into(),
            amount,
            date,
        }
    }
}

/// Service-level errors for expense intake operations.
#[derive(Debug, Error)]
pub enum ExpenseIntakeError {
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

    /// The expense was not found.
    #[error("expense not found: {0}")]
    NotFound(ExpenseId),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ExpenseDomainError),

    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),

    /// Expense repository operation failed.
    #[error(transparent)]
    Repository(#[from] ExpenseRepositoryError),
}

/// Result type for expense intake operations.
pub type ExpenseIntakeResult<T> = Result<T, ExpenseIntakeError>;

/// Expense intake orchestration service.
#[derive(Clone)]
pub struct ExpenseIntakeService<P, R>
where
    P: ProjectRepository,
    R: ExpenseRepository,
{
    projects: Arc<P>,
    repository: Arc<R>,
}

impl<P, R> ExpenseIntakeService<P, R>
where
    P: ProjectRepository,
    R: ExpenseRepository,
{
    /// Creates a new expense intake service.
    #[must_use]
    pub const fn new(projects: Arc<P>, repository: Arc<R>) -> Self {
        Self {
            projects,
            repository,
        }
    }

    /// Submits a pending expense on an eligible project for the requester.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseIntakeError::ProjectNotFound`] when the project
    /// does not exist, [`ExpenseIntakeError::ProjectNotEligible`] when the
    /// requester is neither member nor manager, or a domain/repository
    /// error when validation or persistence fails.
    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
        requester: EmployeeId,
    ) -> ExpenseIntakeResult<Expense> {
        let project = self
            .projects
            .find_by_id(request.project)
            .await?
            .ok_or(ExpenseIntakeError::ProjectNotFound(request.project))?;
        if !project.involves(requester) {
            tracing::warn!(
                employee = %requester,
                project = %project.id(),
                "rejected expense intake for ineligible project"
            );
            return Err(ExpenseIntakeError::ProjectNotEligible {
                employee: requester,
                project: project.id(),
            });
        }

        let expense = Expense::new(NewExpenseData {
            project: request.project,
            description: request.description,
            amount: request.amount,
            date: request.date,
            submitted_by: requester,
        })?;
        self.repository.store(&expense).await?;
        tracing::debug!(
            expense = %expense.id(),
            project = %expense.project(),
            "recorded pending expense"
        );
        Ok(expense)
    }

    /// Returns the requester's expenses, newest date first.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseIntakeError::Repository`] when persistence fails.
    pub async fn list_submitted(
        &self,
        employee: EmployeeId,
    ) -> ExpenseIntakeResult<Vec<Expense>> {
        let mut expenses = self.repository.list_submitted(employee).await?;
        expenses.sort_by(|a, b| b.date().cmp(&a.date()));
        Ok(expenses)
    }

    /// Returns the expense with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseIntakeError::NotFound`] when the expense does not
    /// exist, or a repository error when persistence fails.
    pub async fn find_expense(&self, id: ExpenseId) -> ExpenseIntakeResult<Expense> {
        let expense = self.repository.find_by_id(id).await?;
        expense.ok_or(ExpenseIntakeError::NotFound(id))
    }
}
