use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{
    adapters::inbound::http::TimeRecordResponse,
    app_state::AppState,
    domain::models::{TaskId, TimeRecordId, TimeRecordInput, UserId},
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(create_time_record)).route(
        "/:time_record_id",
        get(get_time_record)
            .put(edit_time_record)
            .delete(delete_time_record),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecordPayload {
    reported_day: String,
    reported_time: String,
    user_id: i32,
    task_id: i32,
    comment: Option<String>,
}

impl From<TimeRecordPayload> for TimeRecordInput {
    fn from(body: TimeRecordPayload) -> Self {
        Self {
            reported_day: body.reported_day,
            reported_time: body.reported_time,
            user_id: UserId::from(body.user_id),
            task_id: TaskId::from(body.task_id),
            comment: body.comment,
        }
    }
}

#[instrument(name = "create_time_record", skip(app_state))]
pub async fn create_time_record(
    State(app_state): State<AppState>,
    Json(body): Json<TimeRecordPayload>,
) -> Result<(StatusCode, Json<TimeRecordResponse>), ApiError> {
    let record = app_state
        .time_records
        .create_time_record(&body.into())
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

#[instrument(name = "get_time_record", skip(app_state))]
pub async fn get_time_record(
    Path(time_record_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<TimeRecordResponse>, ApiError> {
    let record = app_state
        .time_records
        .get_time_record(&TimeRecordId::from(time_record_id))
        .await?;

    Ok(Json(record.into()))
}

#[instrument(name = "edit_time_record", skip(app_state))]
pub async fn edit_time_record(
    Path(time_record_id): Path<i32>,
    State(app_state): State<AppState>,
    Json(body): Json<TimeRecordPayload>,
) -> Result<Json<TimeRecordResponse>, ApiError> {
    let record = app_state
        .time_records
        .edit_time_record(&TimeRecordId::from(time_record_id), &body.into())
        .await?;

    Ok(Json(record.into()))
}

#[instrument(name = "delete_time_record", skip(app_state))]
pub async fn delete_time_record(
    Path(time_record_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<bool>, ApiError> {
    let deleted = app_state
        .time_records
        .delete_time_record(&TimeRecordId::from(time_record_id))
        .await?;

    Ok(Json(deleted))
}

#[instrument(name = "list_time_records_for_user", skip(app_state))]
pub async fn list_for_user(
    Path(user_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TimeRecordResponse>>, ApiError> {
    let records = app_state
        .time_records
        .list_for_user(&UserId::from(user_id))
        .await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[instrument(name = "list_time_records_for_task", skip(app_state))]
pub async fn list_for_task(
    Path(task_id): Path<i32>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<TimeRecordResponse>>, ApiError> {
    let records = app_state
        .time_records
        .list_for_task(&TaskId::from(task_id))
        .await?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}
