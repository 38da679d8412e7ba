use thiserror::Error;

use crate::domain::models::{ActivityId, ProjectId, TaskId, TimeRecordId, UserId};

/// A failure reported by a persistence adapter.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StorageError(String);

impl StorageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Errors that can occur during time record operations.
#[derive(Debug, Error)]
pub enum TimeRecordError {
    #[error("invalid time record: {0}")]
    InvalidTimeRecord(String),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("time record not found: {0}")]
    TimeRecordNotFound(TimeRecordId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TimeRecordError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidTimeRecord(msg.into())
    }
}

/// Errors that can occur while reading projects, activities, tasks and users.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    #[error("activity not found: {0}")]
    ActivityNotFound(ActivityId),
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    #[error("user not found: {0}")]
    UserNotFound(UserId),
    #[error("no accountable user assigned")]
    NoAccountable,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
