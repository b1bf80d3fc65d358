//! Error types for expense domain validation and parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned while constructing domain expense values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExpenseDomainError {
    /// The expense description is empty after trimming.
    #[error("expense description must not be blank")]
    BlankDescription,

    /// The amount carries more than two fractional digits.
    #[error("amount {0} must have at most 2 decimal places")]
    AmountPrecision(Decimal),

    /// The amount does not fit the 10-digit storage column.
    #[error("amount {0} exceeds 10 digits")]
    AmountOutOfRange(Decimal),
}

/// Error returned while parsing expense statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown expense status: {0}")]
pub struct ParseExpenseStatusError(pub String);
