//! Error handling for the HTTP API
//!
//! Maps internal task errors to HTTP status codes and the fixed JSON
//! error shape `{"error": "<message>"}` clients parse deterministically.

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Serialize;
use thiserror::Error;
use todo_core::TaskError;

/// HTTP API errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Fixed-shape error body: `{"error": "<message>"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Fixed-shape informational body: `{"message": "<message>"}`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl ApiError {
    /// The HTTP status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shorthand for the canonical not-found response
    pub fn task_not_found() -> Self {
        ApiError::NotFound("Task not found".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref msg) = self {
            tracing::error!(error = %msg, "Storage failure while handling request");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(_) => ApiError::task_not_found(),
            TaskError::Validation(_) => ApiError::Validation("Title is required".to_string()),
            TaskError::Database(msg) => ApiError::Database(msg),
            TaskError::Configuration(msg) => ApiError::Database(msg),
        }
    }
}
