//! Human-readable order numbers derived from the creation instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order number in the external `ORD-YYYYMMDD-HHMMSS` format.
///
/// The format is an external contract: readable, sortable by creation time,
/// and second-resolution. Two orders created in the same wall-clock second
/// format identically, which is why repositories enforce uniqueness rather
/// than this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Formats the order number for a creation instant.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(format!("ORD-{}", instant.format("%Y%m%d-%H%M%S")))
    }

    /// Reconstructs an order number from persisted storage.
    #[must_use]
    pub fn from_persisted(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the order number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OrderNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
