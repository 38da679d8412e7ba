use std::fmt;

use serde::Serialize;
use url::Url;

use crate::domain::models::{ActivityId, ProjectId, TaskId, UserId};

/// Every endpoint a hypermedia link can point at.
///
/// Rendered paths are relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    Project(ProjectId),
    ProjectActivities(ProjectId),
    ProjectAccountable(ProjectId),
    ProjectMembers(ProjectId),
    Activity(ActivityId),
    ActivityTasks(ActivityId),
    ActivityAccountable(ActivityId),
    Task(TaskId),
    TaskAccountable(TaskId),
    User(UserId),
    UserAccountableProjects(UserId),
    UserAccountableActivities(UserId),
    UserAccountableTasks(UserId),
    UserProjects(UserId),
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRoute::Project(id) => write!(f, "/projects/{id}"),
            ApiRoute::ProjectActivities(id) => write!(f, "/projects/{id}/activities"),
            ApiRoute::ProjectAccountable(id) => write!(f, "/projects/{id}/accountable"),
            ApiRoute::ProjectMembers(id) => write!(f, "/projects/{id}/members"),
            ApiRoute::Activity(id) => write!(f, "/activities/{id}"),
            ApiRoute::ActivityTasks(id) => write!(f, "/activities/{id}/tasks"),
            ApiRoute::ActivityAccountable(id) => write!(f, "/activities/{id}/accountable"),
            ApiRoute::Task(id) => write!(f, "/tasks/{id}"),
            ApiRoute::TaskAccountable(id) => write!(f, "/tasks/{id}/accountable"),
            ApiRoute::User(id) => write!(f, "/users/{id}"),
            ApiRoute::UserAccountableProjects(id) => {
                write!(f, "/users/{id}/accountable-projects")
            }
            ApiRoute::UserAccountableActivities(id) => {
                write!(f, "/users/{id}/accountable-activities")
            }
            ApiRoute::UserAccountableTasks(id) => write!(f, "/users/{id}/accountable-tasks"),
            ApiRoute::UserProjects(id) => write!(f, "/users/{id}/projects"),
        }
    }
}

/// The four resource kinds that carry hypermedia links, with the ids their
/// links are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkedResource {
    Project {
        id: ProjectId,
    },
    Activity {
        id: ActivityId,
        project_id: ProjectId,
    },
    Task {
        id: TaskId,
        activity_id: ActivityId,
    },
    User {
        id: UserId,
    },
}

impl LinkedResource {
    /// The fixed relation table for this kind. `self` is always first.
    pub fn relations(&self) -> Vec<(&'static str, ApiRoute)> {
        match *self {
            LinkedResource::Project { id } => vec![
                ("self", ApiRoute::Project(id)),
                ("activities", ApiRoute::ProjectActivities(id)),
                ("accountable", ApiRoute::ProjectAccountable(id)),
                ("members", ApiRoute::ProjectMembers(id)),
            ],
            LinkedResource::Activity { id, project_id } => vec![
                ("self", ApiRoute::Activity(id)),
                ("project", ApiRoute::Project(project_id)),
                ("tasks", ApiRoute::ActivityTasks(id)),
                ("accountable", ApiRoute::ActivityAccountable(id)),
            ],
            LinkedResource::Task { id, activity_id } => vec![
                ("self", ApiRoute::Task(id)),
                ("activity", ApiRoute::Activity(activity_id)),
                ("accountable", ApiRoute::TaskAccountable(id)),
            ],
            LinkedResource::User { id } => vec![
                ("self", ApiRoute::User(id)),
                ("accountableProjects", ApiRoute::UserAccountableProjects(id)),
                ("accountableActivities", ApiRoute::UserAccountableActivities(id)),
                ("accountableTasks", ApiRoute::UserAccountableTasks(id)),
                ("projects", ApiRoute::UserProjects(id)),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
}

/// Insertion-ordered links of one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(Vec<Link>);

impl Links {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.0.iter()
    }

    pub fn href(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|link| link.rel == rel)
            .map(|link| link.href.as_str())
    }
}

/// A response that gets hypermedia links attached before it is returned.
pub trait Linked {
    fn resource(&self) -> LinkedResource;

    fn links_mut(&mut self) -> &mut Links;
}

/// Renders link targets against the public base URL of the API.
#[derive(Debug, Clone)]
pub struct LinkAssembler {
    base_url: String,
}

impl LinkAssembler {
    pub fn new(base_url: &Url) -> Self {
        Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn href(&self, route: &ApiRoute) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// Attach the full link set. Any links already present are replaced.
    pub fn assemble<T: Linked>(&self, mut resource: T) -> T {
        let links = resource
            .resource()
            .relations()
            .into_iter()
            .map(|(rel, route)| Link {
                rel,
                href: self.href(&route),
            })
            .collect();

        *resource.links_mut() = Links(links);
        resource
    }

    pub fn assemble_all<T: Linked>(&self, resources: impl IntoIterator<Item = T>) -> Vec<T> {
        resources
            .into_iter()
            .map(|resource| self.assemble(resource))
            .collect()
    }
}
