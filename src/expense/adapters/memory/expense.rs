//! In-memory repository for expense intake tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::employee::domain::EmployeeId;
use crate::expense::{
    domain::{Expense, ExpenseId},
    ports::{ExpenseRepository, ExpenseRepositoryError, ExpenseRepositoryResult},
};
use crate::project::domain::ProjectId;

/// Thread-safe in-memory expense repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExpenseRepository {
    state: Arc<RwLock<InMemoryExpenseState>>,
}

#[derive(Debug, Default)]
struct InMemoryExpenseState {
    expenses: HashMap<ExpenseId, Expense>,
    insertion_order: Vec<ExpenseId>,
}

impl InMemoryExpenseRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn list_where(
    state: &InMemoryExpenseState,
    mut predicate: impl FnMut(&Expense) -> bool,
) -> Vec<Expense> {
    state
        .insertion_order
        .iter()
        .filter_map(|id| state.expenses.get(id))
        .filter(|expense| predicate(expense))
        .cloned()
        .collect()
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn store(&self, expense: &Expense) -> ExpenseRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ExpenseRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.expenses.contains_key(&expense.id()) {
            return Err(ExpenseRepositoryError::DuplicateExpense(expense.id()));
        }

        state.insertion_order.push(expense.id());
        state.expenses.insert(expense.id(), expense.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ExpenseId) -> ExpenseRepositoryResult<Option<Expense>> {
        let state = self.state.read().map_err(|err| {
            ExpenseRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.expenses.get(&id).cloned())
    }

    async fn list_submitted(
        &self,
        employee: EmployeeId,
    ) -> ExpenseRepositoryResult<Vec<Expense>> {
        let state = self.state.read().map_err(|err| {
            ExpenseRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(list_where(&state, |expense| {
            expense.submitted_by() == employee
        }))
    }

    async fn list_by_project(
        &self,
        project: ProjectId,
    ) -> ExpenseRepositoryResult<Vec<Expense>> {
        let state = self.state.read().map_err(|err| {
            ExpenseRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(list_where(&state, |expense| expense.project() == project))
    }
}
