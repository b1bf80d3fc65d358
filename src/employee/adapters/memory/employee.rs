//! In-memory repository for employee identity tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::employee::{
    domain::{Employee, EmployeeId, PrincipalId},
    ports::{EmployeeRepository, EmployeeRepositoryError, EmployeeRepositoryResult},
};

/// Thread-safe in-memory employee repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    state: Arc<RwLock<InMemoryEmployeeState>>,
}

#[derive(Debug, Default)]
struct InMemoryEmployeeState {
    employees: HashMap<EmployeeId, Employee>,
    principal_index: HashMap<PrincipalId, EmployeeId>,
    insertion_order: Vec<EmployeeId>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn store(&self, employee: &Employee) -> EmployeeRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        if state.employees.contains_key(&employee.id()) {
            return Err(EmployeeRepositoryError::DuplicateEmployee(employee.id()));
        }
        if state.principal_index.contains_key(&employee.principal()) {
            return Err(EmployeeRepositoryError::DuplicatePrincipal(
                employee.principal(),
            ));
        }

        state.principal_index.insert(employee.principal(), employee.id());
        state.insertion_order.push(employee.id());
        state.employees.insert(employee.id(), employee.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: EmployeeId) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.employees.get(&id).cloned())
    }

    async fn find_by_principal(
        &self,
        principal: PrincipalId,
    ) -> EmployeeRepositoryResult<Option<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let employee = state
            .principal_index
            .get(&principal)
            .and_then(|id| state.employees.get(id))
            .cloned();
        Ok(employee)
    }

    async fn list_all(&self) -> EmployeeRepositoryResult<Vec<Employee>> {
        let state = self.state.read().map_err(|err| {
            EmployeeRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .insertion_order
            .iter()
            .filter_map(|id| state.employees.get(id).cloned())
            .collect())
    }
}
