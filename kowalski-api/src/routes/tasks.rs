use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::{time_records, ApiError};
use crate::{
    adapters::inbound::http::{TaskResponse, UserResponse},
    app_state::AppState,
    domain::models::TaskId,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:task_id", get(get_task))
        .route("/:task_id/accountable", get(get_accountable))
        .route("/:task_id/timerecords", get(time_records::list_for_task))
}

#[instrument(name = "get_task", skip(app_state))]
async fn get_task(
    Path(task_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = app_state.directory.get_task(&TaskId::from(task_id)).await?;

    Ok(Json(app_state.links.assemble(TaskResponse::from(task))))
}

#[instrument(name = "get_task_accountable", skip(app_state))]
async fn get_accountable(
    Path(task_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state
        .directory
        .get_task_accountable(&TaskId::from(task_id))
        .await?;

    Ok(Json(app_state.links.assemble(UserResponse::from(user))))
}
