//! Eligibility rule gating task and expense intake.

use super::{Project, ProjectId};
use crate::employee::domain::EmployeeId;
use std::collections::HashSet;

/// Returns the projects where the employee is a team member or the manager.
///
/// This is the set offered when creating a task or expense; submitting a
/// project outside it is a validation failure, never a silent bypass. The
/// result preserves the input order and contains each project once.
///
/// Evaluated once per request over an explicit project set, rather than
/// hidden inside form or query construction.
#[must_use]
pub fn eligible_projects(
    employee: EmployeeId,
    projects: impl IntoIterator<Item = Project>,
) -> Vec<Project> {
    let mut seen: HashSet<ProjectId> = HashSet::new();
    projects
        .into_iter()
        .filter(|project| project.involves(employee))
        .filter(|project| seen.insert(project.id()))
        .collect()
}
