use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::{
        parse_reported_day, parse_reported_time, NewTimeRecord, TaskId, TimeRecord,
        TimeRecordId, TimeRecordInput, UserId,
    },
    ports::{
        inbound::TimeRecordService,
        outbound::{TaskRepository, TimeRecordRepository, UserRepository},
    },
    TimeRecordError,
};

/// Implementation of the TimeRecordService inbound port.
///
/// Users and tasks are only referenced: they must exist when a record is
/// created or edited, but deleting a record never touches them.
pub struct TimeRecordServiceImpl<R, U, T> {
    records: Arc<R>,
    users: Arc<U>,
    tasks: Arc<T>,
}

impl<R, U, T> TimeRecordServiceImpl<R, U, T> {
    pub fn new(records: Arc<R>, users: Arc<U>, tasks: Arc<T>) -> Self {
        Self {
            records,
            users,
            tasks,
        }
    }
}

impl<R: TimeRecordRepository, U: UserRepository, T: TaskRepository> TimeRecordServiceImpl<R, U, T> {
    /// Check the input in order: day, time, user, task.
    async fn validate(&self, input: &TimeRecordInput) -> Result<NewTimeRecord, TimeRecordError> {
        let reported_day = parse_reported_day(&input.reported_day)?;
        let reported_time = parse_reported_time(&input.reported_time)?;

        let user = self
            .users
            .find_by_id(&input.user_id)
            .await?
            .ok_or(TimeRecordError::UserNotFound(input.user_id))?;

        let task = self
            .tasks
            .find_by_id(&input.task_id)
            .await?
            .ok_or(TimeRecordError::TaskNotFound(input.task_id))?;

        Ok(NewTimeRecord {
            user_id: user.id,
            task_id: task.id,
            reported_day,
            reported_time,
            comment: input.comment.clone(),
        })
    }

    async fn find_record(&self, id: &TimeRecordId) -> Result<TimeRecord, TimeRecordError> {
        self.records
            .find_by_id(id)
            .await?
            .ok_or(TimeRecordError::TimeRecordNotFound(*id))
    }
}

#[async_trait]
impl<R: TimeRecordRepository, U: UserRepository, T: TaskRepository> TimeRecordService
    for TimeRecordServiceImpl<R, U, T>
{
    async fn create_time_record(
        &self,
        input: &TimeRecordInput,
    ) -> Result<TimeRecord, TimeRecordError> {
        let record = self.validate(input).await?;
        let saved = self.records.insert(&record).await?;

        tracing::info!(
            time_record_id = %saved.id,
            user_id = %saved.user_id,
            task_id = %saved.task_id,
            "created time record"
        );

        Ok(saved)
    }

    async fn get_time_record(&self, id: &TimeRecordId) -> Result<TimeRecord, TimeRecordError> {
        self.find_record(id).await
    }

    async fn edit_time_record(
        &self,
        id: &TimeRecordId,
        input: &TimeRecordInput,
    ) -> Result<TimeRecord, TimeRecordError> {
        let existing = self.find_record(id).await?;
        let replacement = self.validate(input).await?;

        let saved = self
            .records
            .update(&existing.replace(replacement))
            .await?
            .ok_or(TimeRecordError::TimeRecordNotFound(*id))?;

        tracing::info!(time_record_id = %saved.id, "edited time record");

        Ok(saved)
    }

    async fn delete_time_record(&self, id: &TimeRecordId) -> Result<bool, TimeRecordError> {
        if !self.records.delete(id).await? {
            return Err(TimeRecordError::TimeRecordNotFound(*id));
        }

        tracing::info!(time_record_id = %id, "deleted time record");

        Ok(true)
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, TimeRecordError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(TimeRecordError::UserNotFound(*user_id))?;

        Ok(self.records.find_by_user(&user.id).await?)
    }

    async fn list_for_task(&self, task_id: &TaskId) -> Result<Vec<TimeRecord>, TimeRecordError> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TimeRecordError::TaskNotFound(*task_id))?;

        Ok(self.records.find_by_task(&task.id).await?)
    }
}
