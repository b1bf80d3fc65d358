//! Domain model for employee profiles.
//!
//! An employee profile is the unit of authorization throughout the crate.
//! Each profile is bound one-to-one to an authentication principal owned by
//! the out-of-scope session layer.

mod employee;
mod error;
mod ids;

pub use employee::{
    DEFAULT_DEPARTMENT, DEFAULT_PHONE, DEFAULT_POSITION, Employee, PersistedEmployeeData,
};
pub use error::EmployeeDomainError;
pub use ids::{EmployeeId, PrincipalId};
