//! Application services for project planning and reporting.

mod planning;
mod reporting;

pub use planning::{
    CreateProjectRequest, ProjectPlanningError, ProjectPlanningResult, ProjectPlanningService,
};
pub use reporting::{ProjectReportingError, ProjectReportingResult, ProjectReportingService};
