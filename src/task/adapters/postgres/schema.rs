//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    ///
    /// `project_id` and `assigned_to` reference their owning rows with
    /// cascade-on-delete.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 200]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Owning project; cascades on project deletion.
        project_id -> Uuid,
        /// Assigned employee; cascades on employee deletion.
        assigned_to -> Uuid,
        /// Due date.
        due_date -> Date,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
