use super::{ActivityId, ProjectId, UserId};

/// An activity within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: ActivityId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub accountable_id: Option<UserId>,
}

impl Activity {
    pub fn new(
        id: impl Into<ActivityId>,
        project_id: impl Into<ProjectId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
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
