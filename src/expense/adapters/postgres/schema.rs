//! Diesel schema for expense persistence.

diesel::table! {
    /// Expense submissions.
    ///
    /// `project_id` and `submitted_by` reference their owning rows with
    /// cascade-on-delete. `amount` is `NUMERIC(10, 2)`.
    expenses (id) {
        /// Internal expense identifier.
        id -> Uuid,
        /// Project the expense is charged to; cascades on project deletion.
        project_id -> Uuid,
        /// What was purchased.
        #[max_length = 200]
        description -> Varchar,
        /// Amount in currency units.
        amount -> Numeric,
        /// Date the expense was incurred.
        date -> Date,
        /// Submitting employee; cascades on employee deletion.
        submitted_by -> Uuid,
        /// Review status.
        #[max_length = 20]
        status -> Varchar,
    }
}
