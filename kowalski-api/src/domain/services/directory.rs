use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{Activity, ActivityId, Project, ProjectId, Task, TaskId, User, UserId},
    ports::{
        inbound::DirectoryService,
        outbound::{ActivityRepository, ProjectRepository, TaskRepository, UserRepository},
    },
    DirectoryError,
};

/// Implementation of the DirectoryService inbound port.
///
/// Every related-collection lookup resolves its owner first, so a missing
/// owner is reported as not found rather than as an empty list.
pub struct DirectoryServiceImpl<P, A, T, U> {
    projects: Arc<P>,
    activities: Arc<A>,
    tasks: Arc<T>,
    users: Arc<U>,
}

impl<P, A, T, U> DirectoryServiceImpl<P, A, T, U> {
    pub fn new(projects: Arc<P>, activities: Arc<A>, tasks: Arc<T>, users: Arc<U>) -> Self {
        Self {
            projects,
            activities,
            tasks,
            users,
        }
    }
}

impl<P, A, T, U> DirectoryServiceImpl<P, A, T, U>
where
    P: ProjectRepository,
    A: ActivityRepository,
    T: TaskRepository,
    U: UserRepository,
{
    async fn accountable(&self, user_id: Option<UserId>) -> Result<User, DirectoryError> {
        let user_id = user_id.ok_or(DirectoryError::NoAccountable)?;
        self.get_user(&user_id).await
    }
}

#[async_trait]
impl<P, A, T, U> DirectoryService for DirectoryServiceImpl<P, A, T, U>
where
    P: ProjectRepository,
    A: ActivityRepository,
    T: TaskRepository,
    U: UserRepository,
{
    async fn get_project(&self, id: &ProjectId) -> Result<Project, DirectoryError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::ProjectNotFound(*id))
    }

    async fn get_project_activities(
        &self,
        id: &ProjectId,
    ) -> Result<Vec<Activity>, DirectoryError> {
        let project = self.get_project(id).await?;
        Ok(self.activities.find_by_project(&project.id).await?)
    }

    async fn get_project_accountable(&self, id: &ProjectId) -> Result<User, DirectoryError> {
        let project = self.get_project(id).await?;
        self.accountable(project.accountable_id).await
    }

    async fn get_project_members(&self, id: &ProjectId) -> Result<Vec<User>, DirectoryError> {
        let project = self.get_project(id).await?;
        Ok(self.users.find_members_of(&project.id).await?)
    }

    async fn get_activity(&self, id: &ActivityId) -> Result<Activity, DirectoryError> {
        self.activities
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::ActivityNotFound(*id))
    }

    async fn get_activity_tasks(&self, id: &ActivityId) -> Result<Vec<Task>, DirectoryError> {
        let activity = self.get_activity(id).await?;
        Ok(self.tasks.find_by_activity(&activity.id).await?)
    }

    async fn get_activity_accountable(&self, id: &ActivityId) -> Result<User, DirectoryError> {
        let activity = self.get_activity(id).await?;
        self.accountable(activity.accountable_id).await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, DirectoryError> {
        self.tasks
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::TaskNotFound(*id))
    }

    async fn get_task_accountable(&self, id: &TaskId) -> Result<User, DirectoryError> {
        let task = self.get_task(id).await?;
        self.accountable(task.accountable_id).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, DirectoryError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DirectoryError::UserNotFound(*id))
    }

    async fn get_accountable_projects(&self, id: &UserId) -> Result<Vec<Project>, DirectoryError> {
        let user = self.get_user(id).await?;
        Ok(self.projects.find_by_accountable(&user.id).await?)
    }

    async fn get_accountable_activities(
        &self,
        id: &UserId,
    ) -> Result<Vec<Activity>, DirectoryError> {
        let user = self.get_user(id).await?;
        Ok(self.activities.find_by_accountable(&user.id).await?)
    }

    async fn get_accountable_tasks(&self, id: &UserId) -> Result<Vec<Task>, DirectoryError> {
        let user = self.get_user(id).await?;
        Ok(self.tasks.find_by_accountable(&user.id).await?)
    }

    async fn get_user_projects(&self, id: &UserId) -> Result<Vec<Project>, DirectoryError> {
        let user = self.get_user(id).await?;
        Ok(self.projects.find_by_member(&user.id).await?)
    }
}
