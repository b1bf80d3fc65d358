//! Diesel row models for expense persistence.

use super::schema::expenses;
use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;

/// Query result row for expense submissions.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = expenses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ExpenseRow {
    /// Internal expense identifier.
    pub id: uuid::Uuid,
    /// Project the expense is charged to.
    pub project_id: uuid::Uuid,
    /// What was purchased.
    pub description: String,
    /// Amount in currency units.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Submitting employee.
    pub submitted_by: uuid::Uuid,
    /// Review status.
    pub status: String,
}

/// Insert model for expense submissions.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = expenses)]
pub struct NewExpenseRow {
    /// Internal expense identifier.
    pub id: uuid::Uuid,
    /// Project the expense is charged to.
    pub project_id: uuid::Uuid,
    /// What was purchased.
    pub description: String,
    /// Amount in currency units.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Submitting employee.
    pub submitted_by: uuid::Uuid,
    /// Review status.
    pub status: String,
}
