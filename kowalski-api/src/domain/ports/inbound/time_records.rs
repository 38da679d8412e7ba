use async_trait::async_trait;

use crate::domain::{
    models::{TaskId, TimeRecord, TimeRecordId, TimeRecordInput, UserId},
    TimeRecordError,
};

/// Inbound port for time record management.
///
/// Every operation either returns the resulting record(s) or fails with the
/// first validation or lookup error encountered. Nothing is persisted on
/// failure.
#[async_trait]
pub trait TimeRecordService: Send + Sync + 'static {
    /// Validate and persist a new record.
    ///
    /// Checks run in a fixed order: day, time, user, task.
    async fn create_time_record(
        &self,
        input: &TimeRecordInput,
    ) -> Result<TimeRecord, TimeRecordError>;

    async fn get_time_record(&self, id: &TimeRecordId) -> Result<TimeRecord, TimeRecordError>;

    /// Replace every field of an existing record.
    ///
    /// The record itself is resolved first, then the input is checked in the
    /// same order as [`TimeRecordService::create_time_record`].
    async fn edit_time_record(
        &self,
        id: &TimeRecordId,
        input: &TimeRecordInput,
    ) -> Result<TimeRecord, TimeRecordError>;

    async fn delete_time_record(&self, id: &TimeRecordId) -> Result<bool, TimeRecordError>;

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, TimeRecordError>;

    async fn list_for_task(&self, task_id: &TaskId) -> Result<Vec<TimeRecord>, TimeRecordError>;
}
