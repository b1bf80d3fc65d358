//! Customer order aggregate root and status mapping.

use super::{OrderDomainError, OrderId, OrderNumber, ParseOrderStatusError};
use crate::employee::domain::EmployeeId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fulfilment status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Received and not yet picked up.
    #[default]
    Pending,
    /// Being fulfilled.
    Processing,
    /// Fulfilled.
    Completed,
    /// Cancelled before fulfilment.
    Cancelled,
}

impl OrderStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns the presentation tag for this status.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::Processing => "info",
            Self::Completed => "success",
            Self::Cancelled => "danger",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseOrderStatusError(value.to_owned())),
        }
    }
}

/// Returns the presentation tag for a raw status value.
///
/// Total over arbitrary strings: values outside the status table map to
/// `"secondary"`.
#[must_use]
pub fn status_tag(value: &str) -> &'static str {
    OrderStatus::try_from(value).map_or("secondary", OrderStatus::tag)
}

/// Parameter object for creating a customer order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderData {
    /// Customer name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Free-form notes; may be blank.
    pub notes: String,
    /// Employee recording the order.
    pub created_by: EmployeeId,
}

/// Parameter object for reconstructing a persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderData {
    /// Persisted order identifier.
    pub id: OrderId,
    /// Persisted order number.
    pub order_number: OrderNumber,
    /// Persisted customer name.
    pub customer_name: String,
    /// Persisted customer email address.
    pub customer_email: String,
    /// Persisted customer phone number.
    pub customer_phone: String,
    /// Persisted creation instant.
    pub order_date: DateTime<Utc>,
    /// Persisted fulfilment status.
    pub status: OrderStatus,
    /// Persisted order total.
    pub total_amount: Decimal,
    /// Persisted recording employee.
    pub created_by: EmployeeId,
    /// Persisted notes.
    pub notes: String,
}

/// Customer order aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    order_number: OrderNumber,
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    order_date: DateTime<Utc>,
    status: OrderStatus,
    total_amount: Decimal,
    created_by: EmployeeId,
    notes: String,
}

impl Order {
    /// Creates a new pending order.
    ///
    /// The order date and number are both derived from the same clock
    /// reading; the total starts at zero because no order-line entity
    /// exists to derive it from.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError`] when the customer name or phone is
    /// blank or the email is not plausibly formed.
    pub fn new(data: NewOrderData, clock: &impl Clock) -> Result<Self, OrderDomainError> {
        let name = data.customer_name.trim();
        if name.is_empty() {
            return Err(OrderDomainError::BlankCustomerName);
        }
        if data.customer_phone.trim().is_empty() {
            return Err(OrderDomainError::BlankCustomerPhone);
        }
        let email = data.customer_email.trim();
        if !is_plausible_email(email) {
            return Err(OrderDomainError::InvalidCustomerEmail(data.customer_email));
        }

        let instant = clock.utc();
        Ok(Self {
            id: OrderId::new(),
            order_number: OrderNumber::from_datetime(instant),
            customer_name: name.to_owned(),
            customer_email: email.to_owned(),
            customer_phone: data.customer_phone,
            order_date: instant,
            status: OrderStatus::default(),
            total_amount: Decimal::ZERO,
            created_by: data.created_by,
            notes: data.notes,
        })
    }

    /// Reconstructs an order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOrderData) -> Self {
        Self {
            id: data.id,
            order_number: data.order_number,
            customer_name: data.customer_name,
            customer_email: data.customer_email,
            customer_phone: data.customer_phone,
            order_date: data.order_date,
            status: data.status,
            total_amount: data.total_amount,
            created_by: data.created_by,
            notes: data.notes,
        }
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the generated order number.
    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the customer email address.
    #[must_use]
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    /// Returns the customer phone number.
    #[must_use]
    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    /// Returns the fulfilment status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the order total.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Returns the recording employee.
    #[must_use]
    pub const fn created_by(&self) -> EmployeeId {
        self.created_by
    }

    /// Returns the free-form notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Light-weight shape check: one `@` with non-empty sides, no whitespace.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
}
