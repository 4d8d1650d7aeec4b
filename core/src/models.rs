use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// A to-do item.
///
/// Tasks are the sole entity of the service. The `id` is assigned by the
/// store on creation and never reused; `title` and `completed` are
/// mutable via update. The serialized JSON shape is exactly
/// `{"id": n, "title": s, "completed": b}` with no hidden fields.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Task;
///
/// let task = Task {
///     id: 1,
///     title: "Buy milk".to_string(),
///     completed: false,
/// };
/// assert!(!task.completed);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Auto-increment primary key
    pub id: i64,
    /// Task title, never empty or whitespace-only when persisted
    pub title: String,
    /// Completion flag, defaults to false at creation
    pub completed: bool,
}

/// Data transfer object for creating new tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    /// Task title
    pub title: String,
}

impl NewTask {
    /// Create a new NewTask, trimming surrounding whitespace from the title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into().trim().to_string(),
        }
    }
}

/// Validate a task title, returning the trimmed value.
///
/// Rejects empty and whitespace-only titles before they reach storage.
pub fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskError::empty_field("title"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_shape() {
        let task = Task {
            id: 1,
            title: "A".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "A", "completed": false})
        );

        let parsed: Task = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, task);
    }

    #[test]
    fn test_new_task_trims_title() {
        let new_task = NewTask::new("  Buy milk  ");
        assert_eq!(new_task.title, "Buy milk");
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("Buy milk").unwrap(), "Buy milk");
        assert_eq!(validate_title("  padded  ").unwrap(), "padded");

        assert!(validate_title("").unwrap_err().is_validation());
        assert!(validate_title("   ").unwrap_err().is_validation());
    }
}
