//! Expense aggregate root and status mapping.

use super::{ExpenseDomainError, ExpenseId, ParseExpenseStatusError};
use crate::employee::domain::EmployeeId;
use crate::project::domain::ProjectId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum fractional digits an amount may carry.
const MAX_AMOUNT_SCALE: u32 = 2;

/// Review status of an expense submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Awaiting review.
    Pending,
    /// Accepted for reimbursement.
    Approved,
    /// Declined.
    Rejected,
}

impl ExpenseStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the presentation tag for this status.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::Approved => "success",
            Self::Rejected => "danger",
        }
    }
}

impl std::fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ExpenseStatus {
    type Error = ParseExpenseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(ParseExpenseStatusError(value.to_owned())),
        }
    }
}

/// Returns the presentation tag for a raw status value.
///
/// Total over arbitrary strings: values outside the status table map to
/// `"secondary"`.
#[must_use]
pub fn status_tag(value: &str) -> &'static str {
    ExpenseStatus::try_from(value).map_or("secondary", ExpenseStatus::tag)
}

/// Parameter object for creating an expense submission.
///
/// There is intentionally no status field: new submissions are always
/// pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpenseData {
    /// Project the expense is charged to.
    pub project: ProjectId,
    /// What was purchased.
    pub description: String,
    /// Amount in currency units with at most two decimal places.
    pub amount: Decimal,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Submitting employee.
    pub submitted_by: EmployeeId,
}

/// Parameter object for reconstructing a persisted expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedExpenseData {
    /// Persisted expense identifier.
    pub id: ExpenseId,
    /// Persisted project reference.
    pub project: ProjectId,
    /// Persisted description.
    pub description: String,
    /// Persisted amount.
    pub amount: Decimal,
    /// Persisted expense date.
    pub date: NaiveDate,
    /// Persisted submitter.
    pub submitted_by: EmployeeId,
    /// Persisted review status.
    pub status: ExpenseStatus,
}

/// Expense submission aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    project: ProjectId,
    description: String,
    amount: Decimal,
    date: NaiveDate,
    submitted_by: EmployeeId,
    status: ExpenseStatus,
}

impl Expense {
    /// Creates a new pending expense submission.
    ///
    /// The status is always [`ExpenseStatus::Pending`]; callers cannot
    /// supply another value.
    ///
    /// # Errors
    ///
    /// Returns [`ExpenseDomainError::BlankDescription`] for an empty
    /// description, [`ExpenseDomainError::AmountPrecision`] for more than
    /// two fractional digits, or [`ExpenseDomainError::AmountOutOfRange`]
    /// when the amount does not fit the 10-digit storage column.
    pub fn new(data: NewExpenseData) -> Result<Self, ExpenseDomainError> {
        if data.description.trim().is_empty() {
            return Err(ExpenseDomainError::BlankDescription);
        }
        if data.amount.normalize().scale() > MAX_AMOUNT_SCALE {
            return Err(ExpenseDomainError::AmountPrecision(data.amount));
        }
        if data.amount.abs() >= Decimal::from(100_000_000_u64) {
            return Err(ExpenseDomainError::AmountOutOfRange(data.amount));
        }

        Ok(Self {
            id: ExpenseId::new(),
            project: data.project,
            description: data.description,
            amount: data.amount,
            date: data.date,
            submitted_by: data.submitted_by,
            status: ExpenseStatus::Pending,
        })
    }

    /// Reconstructs an expense from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedExpenseData) -> Self {
        Self {
            id: data.id,
            project: data.project,
            description: data.description,
            amount: data.amount,
            date: data.date,
            submitted_by: data.submitted_by,
            status: data.status,
        }
    }

    /// Returns the expense identifier.
    #[must_use]
    pub const fn id(&self) -> ExpenseId {
        self.id
    }

    /// Returns the project the expense is charged to.
    #[must_use]
    pub const fn project(&self) -> ProjectId {
        self.project
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the date the expense was incurred.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the submitting employee.
    #[must_use]
    pub const fn submitted_by(&self) -> EmployeeId {
        self.submitted_by
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> ExpenseStatus {
        self.status
    }
}
