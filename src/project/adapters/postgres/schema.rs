//! Diesel schema for project persistence.

diesel::table! {
    /// Project records.
    ///
    /// `manager_id` references `employees (id)` with cascade-on-delete;
    /// task and expense rows cascade when a project row is deleted.
    projects (id) {
        /// Internal project identifier.
        id -> Uuid,
        /// Project name.
        #[max_length = 200]
        name -> Varchar,
        /// Project description.
        description -> Text,
        /// Start date.
        start_date -> Date,
        /// End date.
        end_date -> Date,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Managing employee; cascades on employee deletion.
        manager_id -> Uuid,
    }
}

diesel::table! {
    /// Many-to-many team membership.
    ///
    /// Both columns cascade on delete of the referenced row.
    project_team_members (project_id, employee_id) {
        /// Owning project.
        project_id -> Uuid,
        /// Member employee.
        employee_id -> Uuid,
    }
}

diesel::joinable!(project_team_members -> projects (project_id));
diesel::allow_tables_to_appear_in_same_query!(projects, project_team_members);
