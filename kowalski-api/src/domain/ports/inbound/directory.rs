use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, Project, ProjectId, Task, TaskId, User, UserId},
    DirectoryError,
};

/// Inbound port for reading projects, activities, tasks and users along
/// with the relations their hypermedia links point at.
#[async_trait]
pub trait DirectoryService: Send + Sync + 'static {
    // ========================================================================
    // Projects
    // ========================================================================

    async fn get_project(&self, id: &ProjectId) -> Result<Project, DirectoryError>;

    async fn get_project_activities(
        &self,
        id: &ProjectId,
    ) -> Result<Vec<Activity>, DirectoryError>;

    async fn get_project_accountable(&self, id: &ProjectId) -> Result<User, DirectoryError>;

    async fn get_project_members(&self, id: &ProjectId) -> Result<Vec<User>, DirectoryError>;

    // ========================================================================
    // Activities
    // ========================================================================

    async fn get_activity(&self, id: &ActivityId) -> Result<Activity, DirectoryError>;

    async fn get_activity_tasks(&self, id: &ActivityId) -> Result<Vec<Task>, DirectoryError>;

    async fn get_activity_accountable(&self, id: &ActivityId) -> Result<User, DirectoryError>;

    // ========================================================================
    // Tasks
    // ========================================================================

    async fn get_task(&self, id: &TaskId) -> Result<Task, DirectoryError>;

    async fn get_task_accountable(&self, id: &TaskId) -> Result<User, DirectoryError>;

    // ========================================================================
    // Users
    // ========================================================================

    async fn get_user(&self, id: &UserId) -> Result<User, DirectoryError>;

    async fn get_accountable_projects(&self, id: &UserId) -> Result<Vec<Project>, DirectoryError>;

    async fn get_accountable_activities(
        &self,
        id: &UserId,
    ) -> Result<Vec<Activity>, DirectoryError>;

    async fn get_accountable_tasks(&self, id: &UserId) -> Result<Vec<Task>, DirectoryError>;

    /// Projects the user is a member of.
    async fn get_user_projects(&self, id: &UserId) -> Result<Vec<Project>, DirectoryError>;
}
