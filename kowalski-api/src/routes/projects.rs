use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::{ActivityResponse, ProjectResponse, UserResponse},
    app_state::AppState,
    domain::models::ProjectId,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:project_id", get(get_project))
        .route("/:project_id/activities", get(list_activities))
        .route("/:project_id/accountable", get(get_accountable))
        .route("/:project_id/members", get(list_members))
}

#[instrument(name = "get_project", skip(app_state))]
async fn get_project(
    Path(project_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = app_state
        .directory
        .get_project(&ProjectId::from(project_id))
        .await?;

    Ok(Json(app_state.links.assemble(ProjectResponse::from(project))))
}

#[instrument(name = "list_project_activities", skip(app_state))]
async fn list_activities(
    Path(project_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ActivityResponse>>, ApiError> {
    let activities = app_state
        .directory
        .get_project_activities(&ProjectId::from(project_id))
        .await?;

    Ok(Json(app_state.links.assemble_all(
        activities.into_iter().map(ActivityResponse::from),
    )))
}

#[instrument(name = "get_project_accountable", skip(app_state))]
async fn get_accountable(
    Path(project_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = app_state
        .directory
        .get_project_accountable(&ProjectId::from(project_id))
        .await?;

    Ok(Json(app_state.links.assemble(UserResponse::from(user))))
}

#[instrument(name = "list_project_members", skip(app_state))]
async fn list_members(
    Path(project_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let members = app_state
        .directory
        .get_project_members(&ProjectId::from(project_id))
        .await?;

    Ok(Json(
        app_state
            .links
            .assemble_all(members.into_iter().map(UserResponse::from)),
    ))
}
