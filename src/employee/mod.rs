//! Employee identity binding for Atrium.
//!
//! Every operation in the crate requires an authenticated principal resolved
//! to an employee profile. This module owns that binding: looking up the
//! profile for a principal and auto-provisioning a default profile on first
//! contact, exposed as a single composable guard rather than per-operation
//! checks. The module follows hexagonal architecture:
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
