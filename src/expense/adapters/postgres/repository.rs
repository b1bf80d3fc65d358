//! `PostgreSQL` repository implementation for expense storage.

use super::{
    models::{ExpenseRow, NewExpenseRow},
    schema::expenses,
};
use crate::employee::domain::EmployeeId;
use crate::expense::{
    domain::{Expense, ExpenseId, ExpenseStatus, PersistedExpenseData},
    ports::{ExpenseRepository, ExpenseRepositoryError, ExpenseRepositoryResult},
};
use crate::project::domain::ProjectId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by expense adapters.
pub type ExpensePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed expense repository.
#[derive(Debug, Clone)]
pub struct PostgresExpenseRepository {
    pool: ExpensePgPool,
}

impl PostgresExpenseRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ExpensePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ExpenseRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ExpenseRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ExpenseRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ExpenseRepositoryError::persistence)?
    }
}

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn store(&self, expense: &Expense) -> ExpenseRepositoryResult<()> {
        let expense_id = expense.id();
        let new_row = to_new_row(expense);

        self.run_blocking(move |connection| {
            diesel::insert_into(expenses::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ExpenseRepositoryError::DuplicateExpense(expense_id)
                    }
                    _ => ExpenseRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ExpenseId) -> ExpenseRepositoryResult<Option<Expense>> {
        self.run_blocking(move |connection| {
            let row = expenses::table
                .filter(expenses::id.eq(id.into_inner()))
                .select(ExpenseRow::as_select())
                .first::<ExpenseRow>(connection)
                .optional()
                .map_err(ExpenseRepositoryError::persistence)?;
            row.map(row_to_expense).transpose()
        })
        .await
    }

    async fn list_submitted(
        &self,
        employee: EmployeeId,
    ) -> ExpenseRepositoryResult<Vec<Expense>> {
        self.run_blocking(move |connection| {
            let rows = expenses::table
                .filter(expenses::submitted_by.eq(employee.into_inner()))
                .order(expenses::date.desc())
                .select(ExpenseRow::as_select())
                .load::<ExpenseRow>(connection)
                .map_err(ExpenseRepositoryError::persistence)?;
            rows.into_iter().map(row_to_expense).collect()
        })
        .await
    }

    async fn list_by_project(
        &self,
        project: ProjectId,
    ) -> ExpenseRepositoryResult<Vec<Expense>> {
        self.run_blocking(move |connection| {
            let rows = expenses::table
                .filter(expenses::project_id.eq(project.into_inner()))
                .order(expenses::date.desc())
                .select(ExpenseRow::as_select())
                .load::<ExpenseRow>(connection)
                .map_err(ExpenseRepositoryError::persistence)?;
            rows.into_iter().map(row_to_expense).collect()
        })
        .await
    }
}

fn to_new_row(expense: &Expense) -> NewExpenseRow {
    NewExpenseRow {
        id: expense.id().into_inner(),
        project_id: expense.project().into_inner(),
        description: expense.description().to_owned(),
        amount: expense.amount(),
        date: expense.date(),
        submitted_by: expense.submitted_by().into_inner(),
        status: expense.status().as_str().to_owned(),
    }
}

fn row_to_expense(row: ExpenseRow) -> ExpenseRepositoryResult<Expense> {
    let status =
        ExpenseStatus::try_from(row.status.as_str()).map_err(ExpenseRepositoryError::persistence)?;
    Ok(Expense::from_persisted(PersistedExpenseData {
        id: ExpenseId::from_uuid(row.id),
        project: ProjectId::from_uuid(row.project_id),
        description: row.description,
        amount: row.amount,
        date: row.date,
        submitted_by: EmployeeId::from_uuid(row.submitted_by),
        status,
    }))
}
