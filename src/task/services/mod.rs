//! Application services for task intake.

mod intake;

pub use intake::{CreateTaskRequest, TaskIntakeError, TaskIntakeResult, TaskIntakeService};
