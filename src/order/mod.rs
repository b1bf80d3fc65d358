//! Customer order intake for Atrium.
//!
//! Orders carry a generated order number derived from the creation instant
//! (`ORD-YYYYMMDD-HHMMSS`). Second resolution means two orders created in
//! the same wall-clock second would collide, so the repository contract
//! enforces order-number uniqueness and surfaces collisions as a typed
//! duplicate error instead of storing a second row. The module follows
//! hexagonal architecture:
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
