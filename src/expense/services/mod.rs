//! Application services for expense intake.

mod intake;

pub use intake::{
    CreateExpenseRequest, ExpenseIntakeError, ExpenseIntakeResult, ExpenseIntakeService,
};
