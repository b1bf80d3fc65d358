//! Project membership and visibility for Atrium.
//!
//! Projects carry a manager and a team-member set with one standing
//! invariant: the manager is always a team member, enforced at the write
//! boundary rather than left to callers. Listing is intentionally
//! unrestricted while task and expense intake is membership-gated; the
//! eligibility rule lives here as a pure function over the project set.
//! The module follows hexagonal architecture:
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
