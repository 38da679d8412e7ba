//! Time record repository port (outbound).

use async_trait::async_trait;

use crate::domain::{
    models::{NewTimeRecord, TaskId, TimeRecord, TimeRecordId, UserId},
    StorageError,
};

/// Outbound port for time record persistence.
#[async_trait]
pub trait TimeRecordRepository: Send + Sync + 'static {
    async fn find_by_id(&self, id: &TimeRecordId) -> Result<Option<TimeRecord>, StorageError>;

    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, StorageError>;

    /// Overwrite every column of an existing record. Returns `None` when no
    /// record had this id.
    async fn update(&self, record: &TimeRecord) -> Result<Option<TimeRecord>, StorageError>;

    /// Delete a record. Returns `false` when no record had this id.
    async fn delete(&self, id: &TimeRecordId) -> Result<bool, StorageError>;

    /// All records owned by a user, ordered by id.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, StorageError>;

    /// All records reported against a task, ordered by id.
    async fn find_by_task(&self, task_id: &TaskId) -> Result<Vec<TimeRecord>, StorageError>;
}
