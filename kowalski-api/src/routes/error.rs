use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::domain::{DirectoryError, TimeRecordError};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<TimeRecordError> for ApiError {
    fn from(err: TimeRecordError) -> Self {
        match err {
            TimeRecordError::InvalidTimeRecord(_) => Self::bad_request(err.to_string()),
            TimeRecordError::UserNotFound(_)
            | TimeRecordError::TaskNotFound(_)
            | TimeRecordError::TimeRecordNotFound(_) => Self::not_found(err.to_string()),
            TimeRecordError::Storage(ref e) => {
                tracing::error!("Time record storage error: {:?}", e);
                Self::internal(err.to_string())
            }
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Storage(ref e) => {
                tracing::error!("Directory storage error: {:?}", e);
                Self::internal(err.to_string())
            }
            _ => Self::not_found(err.to_string()),
        }
    }
}
