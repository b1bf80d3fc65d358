//! Expense intake for Atrium.
//!
//! Expenses are submitted by an employee against a project the employee
//! belongs to. The intake service checks the eligibility predicate, forces
//! the submitter to the requester, and always records new expenses as
//! pending: approval and rejection happen elsewhere and have no operation
//! here. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
