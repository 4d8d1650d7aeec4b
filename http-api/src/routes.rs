//! Request handlers for the task CRUD endpoints
//!
//! Path ids and JSON bodies are parsed by hand rather than through
//! extractor rejections so the error bodies keep the fixed shapes
//! clients expect (`Invalid task ID`, `Invalid JSON`, ...).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use todo_core::{NewTask, Task, TaskRepository};

use crate::error::{ApiError, MessageBody};

/// Shared handler state
pub struct ApiState<R> {
    pub repository: Arc<R>,
}

/// Request body for `POST /tasks`
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
}

/// Request body for `PUT /tasks/{id}`
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Parse a path segment as a task id
fn parse_task_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::Validation("Invalid task ID".to_string()))
}

/// Parse a JSON request body.
///
/// Distinguishes a missing/`null` body (`Ok(None)`) from malformed
/// JSON (`Err`), mirroring how lenient JSON readers treat an empty
/// stream as "no value" rather than a syntax error.
fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body)
        .map_err(|_| ApiError::Validation("Invalid JSON".to_string()))
}

/// `GET /tasks` - list every task in ascending id order
pub async fn list_tasks<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.repository.list_all().await?;
    Ok(Json(tasks))
}

/// `GET /tasks/{id}` - fetch a single task
pub async fn get_task<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&raw_id)?;

    match state.repository.get_by_id(id).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::task_not_found()),
    }
}

/// `POST /tasks` - create a task from `{"title": ...}`
pub async fn create_task<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let request: Option<CreateTaskRequest> = parse_body(&body)?;

    let title = request
        .and_then(|r| r.title)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Title is required".to_string()))?;

    let task = state.repository.create(NewTask::new(title)).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /tasks/{id}` - overwrite title and completed for one task
pub async fn update_task<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
    Path(raw_id): Path<String>,
    body: String,
) -> Result<Json<Task>, ApiError> {
    let id = parse_task_id(&raw_id)?;

    let request: UpdateTaskRequest = parse_body(&body)?
        .ok_or_else(|| ApiError::Validation("Invalid request body".to_string()))?;

    let title = request
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Validation("Title is required".to_string()))?;

    let task = Task {
        id,
        title,
        completed: request.completed,
    };

    if !state.repository.update(&task).await? {
        return Err(ApiError::task_not_found());
    }

    // Return the persisted row rather than echoing the request
    match state.repository.get_by_id(id).await? {
        Some(task) => Ok(Json(task)),
        None => Err(ApiError::task_not_found()),
    }
}

/// `DELETE /tasks/{id}` - remove one task
pub async fn delete_task<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_task_id(&raw_id)?;

    if !state.repository.delete(id).await? {
        return Err(ApiError::task_not_found());
    }

    Ok(Json(MessageBody {
        message: "Task deleted successfully".to_string(),
    }))
}

/// `PUT /tasks` and `DELETE /tasks` - the id segment is mandatory
pub async fn task_id_required() -> ApiError {
    ApiError::Validation("Task ID is required".to_string())
}

/// Router fallback for any unmatched path shape
pub async fn invalid_path() -> ApiError {
    ApiError::Validation("Invalid path".to_string())
}

/// `GET /health` - storage connectivity probe
pub async fn health<R: TaskRepository>(
    State(state): State<Arc<ApiState<R>>>,
) -> Result<impl IntoResponse, ApiError> {
    state.repository.health_check().await?;
    Ok(Json(json!({"status": "ok"})))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("42").unwrap(), 42);
        assert_eq!(parse_task_id("-3").unwrap(), -3);

        let err = parse_task_id("abc").unwrap_err();
        assert_eq!(err, ApiError::Validation("Invalid task ID".to_string()));

        let err = parse_task_id("1.5").unwrap_err();
        assert_eq!(err, ApiError::Validation("Invalid task ID".to_string()));
    }

    #[test]
    fn test_parse_body_variants() {
        // Well-formed body
        let parsed: Option<CreateTaskRequest> = parse_body(r#"{"title":"A"}"#).unwrap();
        assert_eq!(parsed.unwrap().title.as_deref(), Some("A"));

        // Empty and null bodies are "no value", not syntax errors
        let parsed: Option<CreateTaskRequest> = parse_body("").unwrap();
        assert!(parsed.is_none());
        let parsed: Option<CreateTaskRequest> = parse_body("null").unwrap();
        assert!(parsed.is_none());

        // Malformed JSON
        let err = parse_body::<CreateTaskRequest>("{not json").unwrap_err();
        assert_eq!(err, ApiError::Validation("Invalid JSON".to_string()));
    }

    #[test]
    fn test_update_request_completed_defaults_false() {
        let parsed: Option<UpdateTaskRequest> = parse_body(r#"{"title":"A"}"#).unwrap();
        let request = parsed.unwrap();
        assert!(!request.completed);
    }
}
