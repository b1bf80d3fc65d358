//! Project aggregate root.

use super::{ProjectDomainError, ProjectId, ProjectStatus};
use crate::employee::domain::EmployeeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Project aggregate with manager and team membership.
///
/// Invariant: the manager is always a team member. The constructor and
/// persistence reconstruction both apply the union, so the invariant holds
/// regardless of the submitted member set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    status: ProjectStatus,
    manager: EmployeeId,
    team_members: BTreeSet<EmployeeId>,
}

/// Parameter object for reconstructing a persisted project aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted project name.
    pub name: String,
    /// Persisted project description.
    pub description: String,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted end date.
    pub end_date: NaiveDate,
    /// Persisted lifecycle status.
    pub status: ProjectStatus,
    /// Persisted managing employee.
    pub manager: EmployeeId,
    /// Persisted team membership.
    pub team_members: BTreeSet<EmployeeId>,
}

impl Project {
    /// Creates a project managed by `manager`.
    ///
    /// The manager is inserted into the team-member set unconditionally;
    /// submitting the manager in `team_members` is harmless. Date ordering
    /// is not validated, so inverted ranges are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::BlankName`] or
    /// [`ProjectDomainError::BlankDescription`] when the respective field is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ProjectStatus,
        manager: EmployeeId,
        team_members: impl IntoIterator<Item = EmployeeId>,
    ) -> Result<Self, ProjectDomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::BlankName);
        }
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ProjectDomainError::BlankDescription);
        }

        let mut members: BTreeSet<EmployeeId> = team_members.into_iter().collect();
        members.insert(manager);

        Ok(Self {
            id: ProjectId::new(),
            name: trimmed.to_owned(),
            description,
            start_date,
            end_date,
            status,
            manager,
            team_members: members,
        })
    }

    /// Reconstructs a project from persisted storage.
    ///
    /// The manager is unioned into the member set here as well, so rows
    /// written before the invariant was enforced heal on read.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        let mut members = data.team_members;
        members.insert(data.manager);

        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            manager: data.manager,
            team_members: members,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start date.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the end date.
    #[must_use]
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the managing employee.
    #[must_use]
    pub const fn manager(&self) -> EmployeeId {
        self.manager
    }

    /// Returns the team-member set, manager included.
    #[must_use]
    pub const fn team_members(&self) -> &BTreeSet<EmployeeId> {
        &self.team_members
    }

    /// Returns whether the employee is a team member or the manager.
    ///
    /// This is the eligibility predicate gating task and expense intake.
    #[must_use]
    pub fn involves(&self, employee: EmployeeId) -> bool {
        self.manager == employee || self.team_members.contains(&employee)
    }
}
