use super::{ProjectId, UserId};

/// A project. Members are stored as a separate many-to-many relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    /// The user responsible for the project, if one has been assigned.
    pub accountable_id: Option<UserId>,
}

impl Project {
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
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
