//! `PostgreSQL` repository implementation for project storage.

use super::{
    models::{NewProjectRow, NewTeamMemberRow, ProjectRow},
    schema::{project_team_members, projects},
};
use crate::employee::domain::EmployeeId;
use crate::project::{
    domain::{PersistedProjectData, Project, ProjectId, ProjectStatus},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::collections::BTreeSet;

/// `PostgreSQL` connection pool type used by project adapters.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed project repository.
#[derive(Debug, Clone)]
pub struct PostgresProjectRepository {
    pool: ProjectPgPool,
}

impl PostgresProjectRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProjectRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProjectRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ProjectRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ProjectRepositoryError::persistence)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let new_row = to_new_row(project);
        let member_rows: Vec<NewTeamMemberRow> = project
            .team_members()
            .iter()
            .map(|member| NewTeamMemberRow {
                project_id: project_id.into_inner(),
                employee_id: member.into_inner(),
            })
            .collect();

        self.run_blocking(move |connection| {
            connection
                .transaction::<_, DieselError, _>(|conn| {
                    diesel::insert_into(projects::table)
                        .values(&new_row)
                        .execute(conn)?;
                    diesel::insert_into(project_team_members::table)
                        .values(&member_rows)
                        .execute(conn)?;
                    Ok(())
                })
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectRepositoryError::DuplicateProject(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .filter(projects::id.eq(id.into_inner()))
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            let Some(row) = row else {
                return Ok(None);
            };
            let members = load_members(connection, row.id)?;
            row_to_project(row, members).map(Some)
        })
        .await
    }

    async fn list_all(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .order(projects::name.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| {
                    let members = load_members(connection, row.id)?;
                    row_to_project(row, members)
                })
                .collect()
        })
        .await
    }

    async fn list_for_member(
        &self,
        employee: EmployeeId,
    ) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(move |connection| {
            let rows = projects::table
                .inner_join(project_team_members::table)
                .filter(project_team_members::employee_id.eq(employee.into_inner()))
                .order(projects::name.asc())
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter()
                .map(|row| {
                    let members = load_members(connection, row.id)?;
                    row_to_project(row, members)
                })
                .collect()
        })
        .await
    }
}

fn to_new_row(project: &Project) -> NewProjectRow {
    NewProjectRow {
        id: project.id().into_inner(),
        name: project.name().to_owned(),
        description: project.description().to_owned(),
        start_date: project.start_date(),
        end_date: project.end_date(),
        status: project.status().as_str().to_owned(),
        manager_id: project.manager().into_inner(),
    }
}

fn load_members(
    connection: &mut PgConnection,
    project_id: uuid::Uuid,
) -> ProjectRepositoryResult<BTreeSet<EmployeeId>> {
    let members = project_team_members::table
        .filter(project_team_members::project_id.eq(project_id))
        .select(project_team_members::employee_id)
        .load::<uuid::Uuid>(connection)
        .map_err(ProjectRepositoryError::persistence)?;
    Ok(members.into_iter().map(EmployeeId::from_uuid).collect())
}

fn row_to_project(
    row: ProjectRow,
    team_members: BTreeSet<EmployeeId>,
) -> ProjectRepositoryResult<Project> {
    let status = ProjectStatus::try_from(row.status.as_str())
        .map_err(ProjectRepositoryError::persistence)?;
    Ok(Project::from_persisted(PersistedProjectData {
        id: ProjectId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        start_date: row.start_date,
        end_date: row.end_date,
        status,
        manager: EmployeeId::from_uuid(row.manager_id),
        team_members,
    }))
}
