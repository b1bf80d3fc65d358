//! Diesel schema for employee profile persistence.

diesel::table! {
    /// Employee profiles bound to authentication principals.
    ///
    /// `principal` carries a unique constraint
    /// (`employees_principal_key`). Rows referencing an employee elsewhere
    /// (projects, tasks, expenses, orders) cascade on delete.
    employees (id) {
        /// Internal profile identifier.
        id -> Uuid,
        /// Authentication principal bound one-to-one to this profile.
        principal -> Uuid,
        /// Department name.
        #[max_length = 100]
        department -> Varchar,
        /// Position title.
        #[max_length = 100]
        position -> Varchar,
        /// Contact phone number.
        #[max_length = 20]
        phone -> Varchar,
        /// Hire date.
        hire_date -> Date,
    }
}
