//! `PostgreSQL` repository implementation for employee profile storage.

use super::{
    models::{EmployeeRow, NewEmployeeRow},
    schema::employees,
};
use crate::employee::{
    domain::{Employee, EmployeeId, PersistedEmployeeData, PrincipalId},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by employee adapters.
pub type EmployeePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed employee repository.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: EmployeePgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: EmployeePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> EmployeeRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> EmployeeRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(EmployeeRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(EmployeeRepositoryError::persistence)?
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let employee_id = employee.id();
        let principal = employee.principal();
        let new_row = to_new_row(employee);

        self.run_blocking(move |connection| {
            diesel::insert_into(employees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, ref info)
                        if is_principal_unique_violation(info.as_ref()) =>
                    {
                        EmployeeRepositoryError::DuplicatePrincipal(principal)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        EmployeeRepositoryError::DuplicateEmployee(employee_id)
                    }
                    _ => EmployeeRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::id.eq(id.into_inner()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            Ok(row.map(row_to_employee))
        })
        .await
    }

    async fn find_by_principal(
        &self,
        principal: PrincipalId,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::principal.eq(principal.into_inner()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()
                .map_err(EmployeeRepositoryError::persistence)?;
            Ok(row.map(row_to_employee))
        })
        .await
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let rows = employees::table
                .order(employees::hire_date.asc())
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)
                .map_err(EmployeeRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_employee).collect())
        })
        .await
    }
}

fn to_new_row(employee: &Employee) -> NewEmployeeRow {
    NewEmployeeRow {
        id: employee.id().into_inner(),
        principal: employee.principal().into_inner(),
        department: employee.department().to_owned(),
        position: employee.position().to_owned(),
        phone: employee.phone().to_owned(),
        hire_date: employee.hire_date(),
    }
}

fn row_to_employee(row: EmployeeRow) -> Employee {
    Employee::from_persisted(PersistedEmployeeData {
        id: EmployeeId::from_uuid(row.id),
        principal: PrincipalId::from_uuid(row.principal),
        department: row.department,
        position: row.position,
        phone: row.phone,
        hire_date: row.hire_date,
    })
}

fn is_principal_unique_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.constraint_name()
        .is_some_and(|name| name == "employees_principal_key")
}
