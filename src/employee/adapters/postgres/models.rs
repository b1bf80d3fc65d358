//! Diesel row models for employee persistence.

use super::schema::employees;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for employee profiles.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Internal profile identifier.
    pub id: uuid::Uuid,
    /// Bound authentication principal.
    pub principal: uuid::Uuid,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Contact phone number.
    pub phone: String,
    /// Hire date.
    pub hire_date: NaiveDate,
}

/// Insert model for employee profiles.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Internal profile identifier.
    pub id: uuid::Uuid,
    /// Bound authentication principal.
    pub principal: uuid::Uuid,
    /// Department name.
    pub department: String,
    /// Position title.
    pub position: String,
    /// Contact phone number.
    pub phone: String,
    /// Hire date.
    pub hire_date: NaiveDate,
}
