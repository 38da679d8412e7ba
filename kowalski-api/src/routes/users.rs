use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{time_records, ApiError};
use crate::{
    adapters::inbound::http::{ActivityResponse, ProjectResponse, TaskResponse, UserResponse},
    app_state::AppState,
    domain::models::UserId,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:user_id", get(get_user))
        .route(
            "/:user_id/accountable-projects",
            get(list_accountable_projects),
        )
        .route(
            "/:user_id/accountable-activities",
            get(list_accountable_activities),
        )
        .route("/:user_id/accountable-tasks", get(list_accountable_tasks))
        .route("/:user_id/projects", get(list_projects))
        .route("/:user_id/timerecords", get(time_records::list_for_user))
}

#[instrument(name = "get_user", skip(app_state))]
async fn get_user(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state.directory.get_user(&UserId::from(user_id)).await?;

    Ok(Json(app_state.links.assemble(UserResponse::from(user))))
}

#[instrument(name = "list_accountable_projects", skip(app_state))]
async fn list_accountable_projects(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = app_state
        .directory
        .get_accountable_projects(&UserId::from(user_id))
        .await?;

    Ok(Json(
        app_state
            .links
            .assemble_all(projects.into_iter().map(ProjectResponse::from)),
    ))
}

#[instrument(name = "list_accountable_activities", skip(app_state))]
async fn list_accountable_activities(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activities = app_state
        .directory
        .get_accountable_activities(&UserId::from(user_id))
        .await?;

    Ok(Json(app_state.links.assemble_all(
        activities.into_iter().map(ActivityResponse::from),
    )))
}

#[instrument(name = "list_accountable_tasks", skip(app_state))]
async fn list_accountable_tasks(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state
        .directory
        .get_accountable_tasks(&UserId::from(user_id))
        .await?;

    Ok(Json(
        app_state
            .links
            .assemble_all(tasks.into_iter().map(TaskResponse::from)),
    ))
}

/// Projects the user is a member of.
#[instrument(name = "list_user_projects", skip(app_state))]
async fn list_projects(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = app_state
        .directory
        .get_user_projects(&UserId::from(user_id))
        .await?;

    Ok(Json(
        app_state
            .links
            .assemble_all(projects.into_iter().map(ProjectResponse::from)),
    ))
}
