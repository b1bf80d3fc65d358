//! `PostgreSQL` adapters for order persistence.

mod models;
mod repository;
mod schema;

pub use repository::{OrderPgPool, PostgresOrderRepository};
