//! Task intake for Atrium.
//!
//! Tasks are created by an employee against a project the employee belongs
//! to: the intake service checks the eligibility predicate before
//! persisting, forces assignment to the requester, and stamps timestamps
//! from the injected clock. The module follows hexagonal architecture:
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
