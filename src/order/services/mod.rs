//! Application services for customer order intake.

mod intake;

pub use intake::{CreateOrderRequest, OrderIntakeError, OrderIntakeResult, OrderIntakeService};
