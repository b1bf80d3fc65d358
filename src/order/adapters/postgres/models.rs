//! Diesel row models for order persistence.

use super::schema::orders;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for customer orders.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    /// Internal order identifier.
    pub id: uuid::Uuid,
    /// Generated order number.
    pub order_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Creation instant.
    pub order_date: DateTime<Utc>,
    /// Fulfilment status.
    pub status: String,
    /// Order total.
    pub total_amount: Decimal,
    /// Recording employee.
    pub created_by: uuid::Uuid,
    /// Free-form notes.
    pub notes: String,
}

/// Insert model for customer orders.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    /// Internal order identifier.
    pub id: uuid::Uuid,
    /// Generated order number.
    pub order_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// Customer phone number.
    pub customer_phone: String,
    /// Creation instant.
    pub order_date: DateTime<Utc>,
    /// Fulfilment status.
    pub status: String,
    /// Order total.
    pub total_amount: Decimal,
    /// Recording employee.
    pub created_by: uuid::Uuid,
    /// Free-form notes.
    pub notes: String,
}
