use time::{macros::format_description, Date, Time};

use super::{TaskId, TimeRecordId, UserId};
use crate::domain::TimeRecordError;

/// Time reported by a user against a task on a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecord {
    pub id: TimeRecordId,
    pub user_id: UserId,
    pub task_id: TaskId,
    pub reported_day: Date,
    pub reported_time: Time,
    pub comment: Option<String>,
}

impl TimeRecord {
    /// Replace every field except the id.
    pub fn replace(self, record: NewTimeRecord) -> Self {
        Self {
            id: self.id,
            user_id: record.user_id,
            task_id: record.task_id,
            reported_day: record.reported_day,
            reported_time: record.reported_time,
            comment: record.comment,
        }
    }

    /// The reported day as `YYYY-MM-DD`.
    pub fn reported_day_string(&self) -> String {
        format_reported_day(self.reported_day)
    }

    /// The reported time as `HH:MM`, or `HH:MM:SS` when seconds are set.
    pub fn reported_time_string(&self) -> String {
        format_reported_time(self.reported_time)
    }
}

/// A validated record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeRecord {
    pub user_id: UserId,
    pub task_id: TaskId,
    pub reported_day: Date,
    pub reported_time: Time,
    pub comment: Option<String>,
}

/// Unvalidated input for creating or editing a time record.
///
/// Day and time arrive as strings and are parsed by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecordInput {
    pub reported_day: String,
    pub reported_time: String,
    pub user_id: UserId,
    pub task_id: TaskId,
    pub comment: Option<String>,
}

impl TimeRecordInput {
    pub fn new(
        reported_day: impl Into<String>,
        reported_time: impl Into<String>,
        user_id: impl Into<UserId>,
        task_id: impl Into<TaskId>,
    ) -> Self {
        Self {
            reported_day: reported_day.into(),
            reported_time: reported_time.into(),
            user_id: user_id.into(),
            task_id: task_id.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Signed years (`+2024-01-15`, `-0001-01-01`) are rejected.
pub fn parse_reported_day(value: &str) -> Result<Date, TimeRecordError> {
    if !value.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(TimeRecordError::invalid(format!(
            "Text '{value}' could not be parsed as a day: expected a four digit year"
        )));
    }

    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|e| {
        TimeRecordError::invalid(format!("Text '{value}' could not be parsed as a day: {e}"))
    })
}

/// Parse a strict ISO-8601 local time (`HH:MM` or `HH:MM:SS`).
pub fn parse_reported_time(value: &str) -> Result<Time, TimeRecordError> {
    Time::parse(value, format_description!("[hour]:[minute]:[second]"))
        .or_else(|_| Time::parse(value, format_description!("[hour]:[minute]")))
        .map_err(|e| {
            TimeRecordError::invalid(format!("Text '{value}' could not be parsed as a time: {e}"))
        })
}

pub fn format_reported_day(day: Date) -> String {
    day.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| day.to_string())
}

/// Seconds are dropped when zero, so `09:30:00` comes back as `09:30`.
pub fn format_reported_time(time: Time) -> String {
    let formatted = if time.second() == 0 {
        time.format(format_description!("[hour]:[minute]"))
    } else {
        time.format(format_description!("[hour]:[minute]:[second]"))
    };
    formatted.unwrap_or_else(|_| time.to_string())
}
