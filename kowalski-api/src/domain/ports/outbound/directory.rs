//! Lookup ports (outbound) for the entities time records refer to.
//!
//! Every lookup returns `Option` and collection queries are ordered by id.

use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, Project, ProjectId, Task, TaskId, User, UserId},
    StorageError,
};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StorageError>;

    /// Members of a project.
    async fn find_members_of(&self, project_id: &ProjectId) -> Result<Vec<User>, StorageError>;
}

#[async_trait]
pub trait ProjectRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StorageError>;

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError>;

    /// Projects the user is a member of.
    async fn find_by_member(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError>;
}

#[async_trait]
pub trait ActivityRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, StorageError>;

    async fn find_by_project(&self, project_id: &ProjectId)
        -> Result<Vec<Activity>, StorageError>;

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Activity>, StorageError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, StorageError>;

    async fn find_by_activity(&self, activity_id: &ActivityId) -> Result<Vec<Task>, StorageError>;

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Task>, StorageError>;
}
