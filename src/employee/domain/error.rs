//! Error types for employee domain validation.

use thiserror::Error;

/// Errors returned while constructing employee profile values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeDomainError {
    /// The department is empty after trimming.
    #[error("department must not be blank")]
    BlankDepartment,

    /// The position is empty after trimming.
    #[error("position must not be blank")]
    BlankPosition,
}
