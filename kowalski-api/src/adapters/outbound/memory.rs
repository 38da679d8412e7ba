//! In-memory implementation of every repository port, for tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use itertools::Itertools;

use crate::domain::{
    models::{
        Activity, ActivityId, NewTimeRecord, Project, ProjectId, Task, TaskId, TimeRecord,
        TimeRecordId, User, UserId,
    },
    ports::outbound::{
        ActivityRepository, ProjectRepository, TaskRepository, TimeRecordRepository,
        UserRepository,
    },
    StorageError,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    projects: BTreeMap<ProjectId, Project>,
    members: BTreeSet<(ProjectId, UserId)>,
    activities: BTreeMap<ActivityId, Activity>,
    tasks: BTreeMap<TaskId, Task>,
    time_records: BTreeMap<TimeRecordId, TimeRecord>,
    next_time_record_id: i32,
}

/// Shared in-memory store. Clones see the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

#[allow(dead_code)]
impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: User) -> Self {
        self.tables.write().unwrap().users.insert(user.id, user);
        self
    }

    pub fn with_project(self, project: Project) -> Self {
        self.tables
            .write()
            .unwrap()
            .projects
            .insert(project.id, project);
        self
    }

    pub fn with_member(self, project_id: impl Into<ProjectId>, user_id: impl Into<UserId>) -> Self {
        self.tables
            .write()
            .unwrap()
            .members
            .insert((project_id.into(), user_id.into()));
        self
    }

    pub fn with_activity(self, activity: Activity) -> Self {
        self.tables
            .write()
            .unwrap()
            .activities
            .insert(activity.id, activity);
        self
    }

    pub fn with_task(self, task: Task) -> Self {
        self.tables.write().unwrap().tasks.insert(task.id, task);
        self
    }

    /// Insert a record with a fixed id. Later inserts continue after it.
    pub fn with_time_record(self, record: TimeRecord) -> Self {
        {
            let mut tables = self.tables.write().unwrap();
            tables.next_time_record_id = tables.next_time_record_id.max(record.id.as_i32());
            tables.time_records.insert(record.id, record);
        }
        self
    }

    pub fn time_record(&self, id: i32) -> Option<TimeRecord> {
        self.tables
            .read()
            .unwrap()
            .time_records
            .get(&TimeRecordId::new(id))
            .cloned()
    }

    pub fn time_record_count(&self) -> usize {
        self.tables.read().unwrap().time_records.len()
    }
}

#[async_trait]
impl TimeRecordRepository for InMemoryStore {
    async fn find_by_id(&self, id: &TimeRecordId) -> Result<Option<TimeRecord>, StorageError> {
        Ok(self.tables.read().unwrap().time_records.get(id).cloned())
    }

    async fn insert(&self, record: &NewTimeRecord) -> Result<TimeRecord, StorageError> {
        let mut tables = self.tables.write().unwrap();
        tables.next_time_record_id += 1;
        let saved = TimeRecord {
            id: TimeRecordId::new(tables.next_time_record_id),
            user_id: record.user_id,
            task_id: record.task_id,
            reported_day: record.reported_day,
            reported_time: record.reported_time,
            comment: record.comment.clone(),
        };
        tables.time_records.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn update(&self, record: &TimeRecord) -> Result<Option<TimeRecord>, StorageError> {
        let mut tables = self.tables.write().unwrap();
        Ok(tables.time_records.get_mut(&record.id).map(|existing| {
            *existing = record.clone();
            record.clone()
        }))
    }

    async fn delete(&self, id: &TimeRecordId) -> Result<bool, StorageError> {
        Ok(self.tables.write().unwrap().time_records.remove(id).is_some())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<TimeRecord>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .time_records
            .values()
            .filter(|r| r.user_id == *user_id)
            .cloned()
            .collect())
    }

    async fn find_by_task(&self, task_id: &TaskId) -> Result<Vec<TimeRecord>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .time_records
            .values()
            .filter(|r| r.task_id == *task_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, StorageError> {
        Ok(self.tables.read().unwrap().users.get(id).cloned())
    }

    async fn find_members_of(&self, project_id: &ProjectId) -> Result<Vec<User>, StorageError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .members
            .iter()
            .filter(|(p, _)| p == project_id)
            .filter_map(|(_, u)| tables.users.get(u).cloned())
            .sorted_by_key(|u| u.id)
            .collect())
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, StorageError> {
        Ok(self.tables.read().unwrap().projects.get(id).cloned())
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .projects
            .values()
            .filter(|p| p.accountable_id == Some(*user_id))
            .cloned()
            .collect())
    }

    async fn find_by_member(&self, user_id: &UserId) -> Result<Vec<Project>, StorageError> {
        let tables = self.tables.read().unwrap();
        Ok(tables
            .members
            .iter()
            .filter(|(_, u)| u == user_id)
            .filter_map(|(p, _)| tables.projects.get(p).cloned())
            .sorted_by_key(|p| p.id)
            .collect())
    }
}

#[async_trait]
impl ActivityRepository for InMemoryStore {
    async fn find_by_id(&self, id: &ActivityId) -> Result<Option<Activity>, StorageError> {
        Ok(self.tables.read().unwrap().activities.get(id).cloned())
    }

    async fn find_by_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<Activity>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .activities
            .values()
            .filter(|a| a.project_id == *project_id)
            .cloned()
            .collect())
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Activity>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .activities
            .values()
            .filter(|a| a.accountable_id == Some(*user_id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, StorageError> {
        Ok(self.tables.read().unwrap().tasks.get(id).cloned())
    }

    async fn find_by_activity(&self, activity_id: &ActivityId) -> Result<Vec<Task>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .tasks
            .values()
            .filter(|t| t.activity_id == *activity_id)
            .cloned()
            .collect())
    }

    async fn find_by_accountable(&self, user_id: &UserId) -> Result<Vec<Task>, StorageError> {
        Ok(self
            .tables
            .read()
            .unwrap()
            .tasks
            .values()
            .filter(|t| t.accountable_id == Some(*user_id))
            .cloned()
            .collect())
    }
}
