use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{ActivityResponse, TaskResponse, UserResponse},
    app_state::AppState,
    domain::models::ActivityId,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:activity_id", get(get_activity))
        .route("/:activity_id/tasks", get(list_tasks))
        .route("/:activity_id/accountable", get(get_accountable))
}

#[instrument(name = "get_activity", skip(app_state))]
async fn get_activity(
    Path(activity_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<ActivityResponse>, ApiError> {
    let activity = app_state
        .directory
        .get_activity(&ActivityId::from(activity_id))
        .await?;

    Ok(Json(app_state.links.assemble(ActivityResponse::from(activity))))
}

#[instrument(name = "list_activity_tasks", skip(app_state))]
async fn list_tasks(
    Path(activity_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = app_state
        .directory
        .get_activity_tasks(&ActivityId::from(activity_id))
        .await?;

    Ok(Json(
        app_state
            .links
            .assemble_all(tasks.into_iter().map(TaskResponse::from)),
    ))
}

#[instrument(name = "get_activity_accountable", skip(app_state))]
async fn get_accountable(
    Path(activity_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state
        .directory
        .get_activity_accountable(&ActivityId::from(activity_id))
        .await?;

    Ok(Json(app_state.links.assemble(UserResponse::from(user))))
}
