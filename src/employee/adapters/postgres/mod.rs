//! `PostgreSQL` adapters for employee identity persistence.

mod models;
mod repository;
mod schema;

pub use repository::{EmployeePgPool, PostgresEmployeeRepository};
