//! Project lifecycle status and its presentation mapping.

use super::ParseProjectStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Project is being planned.
    Planning,
    /// Project work is underway.
    InProgress,
    /// Project has been delivered.
    Completed,
    /// Project is temporarily paused.
    OnHold,
}

impl ProjectStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    /// Returns the presentation tag for this status.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Planning => "info",
            Self::InProgress => "primary",
            Self::Completed => "success",
            Self::OnHold => "warning",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "planning" => Ok(Self::Planning),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "on_hold" => Ok(Self::OnHold),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Returns the presentation tag for a raw status value.
///
/// Total over arbitrary strings: values outside the status table map to
/// `"secondary"`, keeping presentation safe for forward-compatible status
/// additions.
#[must_use]
pub fn status_tag(value: &str) -> &'static str {
    ProjectStatus::try_from(value).map_or("secondary", ProjectStatus::tag)
}
