//! Port contracts for project membership and visibility.
//!
//! Ports define infrastructure-agnostic interfaces used by project services
//! and by the task and expense intake gates.

pub mod repository;

pub use repository::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult};
