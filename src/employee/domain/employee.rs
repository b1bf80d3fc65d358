//! Employee profile aggregate.

use super::{EmployeeDomainError, EmployeeId, PrincipalId};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Department assigned to auto-provisioned profiles.
pub const DEFAULT_DEPARTMENT: &str = "Administration";

/// Position assigned to auto-provisioned profiles.
pub const DEFAULT_POSITION: &str = "Admin";

/// Placeholder phone number assigned to auto-provisioned profiles.
pub const DEFAULT_PHONE: &str = "N/A";

/// Employee profile bound one-to-one to an authentication principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    principal: PrincipalId,
    department: String,
    position: String,
    phone: String,
    hire_date: NaiveDate,
}

/// Parameter object for reconstructing a persisted employee profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedEmployeeData {
    /// Persisted profile identifier.
    pub id: EmployeeId,
    /// Persisted principal binding.
    pub principal: PrincipalId,
    /// Persisted department.
    pub department: String,
    /// Persisted position.
    pub position: String,
    /// Persisted phone number.
    pub phone: String,
    /// Persisted hire date.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Creates a profile with explicit fields.
    ///
    /// # Errors
    ///
    /// Returns [`EmployeeDomainError::BlankDepartment`] or
    /// [`EmployeeDomainError::BlankPosition`] when the respective field is
    /// empty after trimming.
    pub fn new(
        principal: PrincipalId,
        department: impl Into<String>,
        position: impl Into<String>,
        phone: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Result<Self, EmployeeDomainError> {
        let department = department.into();
        if department.trim().is_empty() {
            return Err(EmployeeDomainError::BlankDepartment);
        }
        let position = position.into();
        if position.trim().is_empty() {
            return Err(EmployeeDomainError::BlankPosition);
        }

        Ok(Self {
            id: EmployeeId::new(),
            principal,
            department,
            position,
            phone: phone.into(),
            hire_date,
        })
    }

    /// Creates the default profile provisioned on a principal's first
    /// contact with the system.
    ///
    /// The hire date is the current date as observed through the injected
    /// clock. Every first-time principal receives the same default profile,
    /// not only a designated administrator account.
    #[must_use]
    pub fn provisioned(principal: PrincipalId, clock: &impl Clock) -> Self {
        Self {
            id: EmployeeId::new(),
            principal,
            department: DEFAULT_DEPARTMENT.to_owned(),
            position: DEFAULT_POSITION.to_owned(),
            phone: DEFAULT_PHONE.to_owned(),
            hire_date: clock.utc().date_naive(),
        }
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedEmployeeData) -> Self {
        Self {
            id: data.id,
            principal: data.principal,
            department: data.department,
            position: data.position,
            phone: data.phone,
            hire_date: data.hire_date,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> EmployeeId {
        self.id
    }

    /// Returns the bound authentication principal.
    #[must_use]
    pub const fn principal(&self) -> PrincipalId {
        self.principal
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the hire date.
    #[must_use]
    pub const fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
}
