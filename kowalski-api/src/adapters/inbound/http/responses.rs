//! HTTP response types.
//!
//! Project, activity, task and user responses start with an empty link set;
//! handlers pass them through [`LinkAssembler`](super::LinkAssembler) before
//! returning them.

use serde::Serialize;

use super::links::{Linked, LinkedResource, Links};
use crate::domain::models::{
    Activity, ActivityId, Project, ProjectId, Task, TaskId, TimeRecord, TimeRecordId, User, UserId,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordResponse {
    pub id: TimeRecordId,
    pub user_id: UserId,
    pub task_id: TaskId,
    /// `YYYY-MM-DD`.
    pub reported_day: String,
    /// `HH:MM`, with seconds only when they are non-zero. Only canonical
    /// input echoes exactly: `09:30:00` is returned as `09:30`.
    pub reported_time: String,
    pub comment: Option<String>,
}

impl From<TimeRecord> for TimeRecordResponse {
    fn from(record: TimeRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            task_id: record.task_id,
            reported_day: record.reported_day_string(),
            reported_time: record.reported_time_string(),
            comment: record.comment,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub accountable_id: Option<UserId>,
    pub links: Links,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            project_id: project.id,
            name: project.name,
            description: project.description,
            accountable_id: project.accountable_id,
            links: Links::default(),
        }
    }
}

impl Linked for ProjectResponse {
    fn resource(&self) -> LinkedResource {
        LinkedResource::Project {
            id: self.project_id,
        }
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub activity_id: ActivityId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub accountable_id: Option<UserId>,
    pub links: Links,
}

impl From<Activity> for ActivityResponse {
    fn from(activity: Activity) -> Self {
        Self {
            activity_id: activity.id,
            project_id: activity.project_id,
            name: activity.name,
            description: activity.description,
            accountable_id: activity.accountable_id,
            links: Links::default(),
        }
    }
}

impl Linked for ActivityResponse {
    fn resource(&self) -> LinkedResource {
        LinkedResource::Activity {
            id: self.activity_id,
            project_id: self.project_id,
        }
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub task_id: TaskId,
    pub activity_id: ActivityId,
    pub name: String,
    pub description: Option<String>,
    pub accountable_id: Option<UserId>,
    pub links: Links,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            task_id: task.id,
            activity_id: task.activity_id,
            name: task.name,
            description: task.description,
            accountable_id: task.accountable_id,
            links: Links::default(),
        }
    }
}

impl Linked for TaskResponse {
    fn resource(&self) -> LinkedResource {
        LinkedResource::Task {
            id: self.task_id,
            activity_id: self.activity_id,
        }
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub links: Links,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            links: Links::default(),
        }
    }
}

impl Linked for UserResponse {
    fn resource(&self) -> LinkedResource {
        LinkedResource::User { id: self.user_id }
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn time_record_response_serializes_camel_case() {
        let response = TimeRecordResponse::from(TimeRecord {
            id: TimeRecordId::new(3),
            user_id: UserId::new(1),
            task_id: TaskId::new(7),
            reported_day: date!(2024 - 01 - 15),
            reported_time: time!(09:30),
            comment: Some("reviewed PR".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "id": 3,
                "userId": 1,
                "taskId": 7,
                "reportedDay": "2024-01-15",
                "reportedTime": "09:30",
                "comment": "reviewed PR",
            })
        );
    }

    #[test]
    fn time_record_response_drops_zero_seconds() {
        let response = TimeRecordResponse::from(TimeRecord {
            id: TimeRecordId::new(3),
            user_id: UserId::new(1),
            task_id: TaskId::new(7),
            reported_day: date!(2024 - 01 - 15),
            reported_time: time!(09:30:00),
            comment: None,
        });

        assert_eq!(response.reported_time, "09:30");
    }

    #[test]
    fn responses_start_without_links() {
        let response = ActivityResponse::from(Activity::new(12, 4, "Design"));
        assert!(response.links.is_empty());
        assert_eq!(
            response.resource(),
            LinkedResource::Activity {
                id: ActivityId::new(12),
                project_id: ProjectId::new(4),
            }
        );
    }
}
