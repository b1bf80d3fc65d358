//! Diesel row models for project persistence.

use super::schema::{project_team_members, projects};
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Start date.
    pub start_date: NaiveDate,
    /// End date.
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: String,
    /// Managing employee.
    pub manager_id: uuid::Uuid,
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Internal project identifier.
    pub id: uuid::Uuid,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Start date.
    pub start_date: NaiveDate,
    /// End date.
    pub end_date: NaiveDate,
    /// Lifecycle status.
    pub status: String,
    /// Managing employee.
    pub manager_id: uuid::Uuid,
}

/// Insert model for team membership rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = project_team_members)]
pub struct NewTeamMemberRow {
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Member employee.
    pub employee_id: uuid::Uuid,
}
