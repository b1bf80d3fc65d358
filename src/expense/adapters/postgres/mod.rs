//! `PostgreSQL` adapters for expense persistence.

mod models;
mod repository;
mod schema;

pub use repository::{ExpensePgPool, PostgresExpenseRepository};
