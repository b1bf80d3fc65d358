//! Derived reporting figures for a single project.

use super::Project;
use crate::expense::domain::Expense;
use crate::task::domain::{Task, TaskStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Project detail with derived task counts and expense total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    project: Project,
    completed_tasks: usize,
    in_progress_tasks: usize,
    total_expenses: Decimal,
}

impl ProjectSummary {
    /// Computes the summary from the project's tasks and expenses.
    #[must_use]
    pub fn from_parts(project: Project, tasks: &[Task], expenses: &[Expense]) -> Self {
        let completed_tasks = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::Done)
            .count();
        let in_progress_tasks = tasks
            .iter()
            .filter(|task| task.status() == TaskStatus::InProgress)
            .count();
        let total_expenses = expenses.iter().map(Expense::amount).sum();

        Self {
            project,
            completed_tasks,
            in_progress_tasks,
            total_expenses,
        }
    }

    /// Returns the summarized project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the number of tasks with status `done`.
    #[must_use]
    pub const fn completed_tasks(&self) -> usize {
        self.completed_tasks
    }

    /// Returns the number of tasks with status `in_progress`.
    #[must_use]
    pub const fn in_progress_tasks(&self) -> usize {
        self.in_progress_tasks
    }

    /// Returns the summed amount of all expenses on the project.
    #[must_use]
    pub const fn total_expenses(&self) -> Decimal {
        self.total_expenses
    }
}
