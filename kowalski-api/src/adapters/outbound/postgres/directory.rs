use async_trait::async_trait;
use sqlx::PgPool;

use super::storage_error;
use crate::domain::{
    models::{Activity, ActivityId, Project, ProjectId, Task, TaskId, User, UserId},
    ports::outbound::{ActivityRepository, ProjectRepository, TaskRepository, UserRepository},
    StorageError,
};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(row.id, row.first_name, row.last_name, row.email)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProjectRow {
    id: i32,
    name: String,
    description: Option<String>,
    accountable_id: Option<i32>,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: ProjectId::new(row.id),
            name: row.name,
            description: row.description,
            accountable_id: row.accountable_id.map(UserId::new),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ActivityRow {
    id: i32,
    project_id: i32,
    name: String,
    description: Option<String>,
    accountable_id: Option<i32>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Activity {
            id: ActivityId::new(row.id),
            project_id: ProjectId::new(row.project_id),
            name: row.name,
            description: row.description,
            accountable_id: row.accountable_id.map(UserId::new),
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TaskRow {
    id: i32,
    activity_id: i32,
    name: String,
    description: Option<String>,
    accountable_id: Option<i32>,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: TaskId::new(row.id),
            activity_id: ActivityId::new(row.activity_id),
            name: row.name,
            description: row.description,
            accountable_id: row.accountable_id.map(UserId::new),
        }
    }
}

// ============================================================================
// Users
// ============================================================================

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, first_name, last_name, email
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(User::from))
    }

    async fn find_members_of(&self, project_id: &ProjectId) -> Result<Vec<User>, StorageError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT users.id, users.first_name, users.last_name, users.email
            FROM project_members
            JOIN users ON project_members.user_id = users.id
            WHERE project_members.project_id = $1
            ORDER BY users.id
            "#,
        )
        .bind(project_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

// ============================================================================
// Projects
// ============================================================================

pub struct PostgresProjectRepository {
    pool: PgPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StorageError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, accountable_id
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Project::from))
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name, description, accountable_id
            FROM projects
            WHERE accountable_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn find_by_member(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT projects.id, projects.name, projects.description, projects.accountable_id
            FROM project_members
            JOIN projects ON project_members.project_id = projects.id
            WHERE project_members.user_id = $1
            ORDER BY projects.id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Project::from).collect())
    }
}

// ============================================================================
// Activities
// ============================================================================

pub struct PostgresActivityRepository {
    pool: PgPool,
}

impl PostgresActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PostgresActivityRepository {
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, StorageError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, project_id, name, description, accountable_id
            FROM activities
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Activity::from))
    }

    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Activity>, StorageError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, project_id, name, description, accountable_id
            FROM activities
            WHERE project_id = $1
            ORDER BY id
            "#,
        )
        .bind(project_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Activity>, StorageError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            r#"
            SELECT id, project_id, name, description, accountable_id
            FROM activities
            WHERE accountable_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Activity::from).collect())
    }
}

// ============================================================================
// Tasks
// ============================================================================

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, StorageError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, activity_id, name, description, accountable_id
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Task::from))
    }

    async fn find_by_activity(&self, activity_id: &ActivityId) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, activity_id, name, description, accountable_id
            FROM tasks
            WHERE activity_id = $1
            ORDER BY id
            "#,
        )
        .bind(activity_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Task>, StorageError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, activity_id, name, description, accountable_id
            FROM tasks
            WHERE accountable_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}
