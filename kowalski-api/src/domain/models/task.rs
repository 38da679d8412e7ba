use super::{ActivityId, TaskId, UserId};

/// A unit of work within an activity. Time is reported against tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub activity_id: ActivityId,
    pub name: String,
    pub description: Option<String>,
    pub accountable_id: Option<UserId>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        activity_id: impl Into<ActivityId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            activity_id: activity_id.into(),
            name: name.into(),
            description: None,
            accountable_id: None,
        }
    }

    pub fn with_accountable(mut self, user_id: impl Into<UserId>) -> Self {
        self.accountable_id = Some(user_id.into());
        self
    }
}
