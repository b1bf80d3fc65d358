//! Error types for order domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain order values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The customer name is empty after trimming.
    #[error("customer name must not be blank")]
    BlankCustomerName,

    /// The customer phone number is empty after trimming.
    #[error("customer phone must not be blank")]
    BlankCustomerPhone,

    /// The customer email address is not plausibly formed.
    #[error("invalid customer email: {0}")]
    InvalidCustomerEmail(String),
}

/// Error returned while parsing order statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);
