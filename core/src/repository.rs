use crate::{
    error::Result,
    models::{NewTask, Task},
};
use async_trait::async_trait;

/// Repository trait for task persistence and retrieval operations
///
/// This trait defines the interface for all task data operations.
/// Implementations must be thread-safe and support concurrent access;
/// no operation holds state across calls, so callers need no locking
/// discipline of their own.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with `completed = false`
    ///
    /// # Arguments
    /// * `task` - The new task data, with a non-empty title
    ///
    /// # Returns
    /// * `Ok(Task)` - The created task with its store-assigned ID
    /// * `Err(TaskError::Validation)` - If the title is empty
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Get a task by its numeric ID
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - The task if found
    /// * `Ok(None)` - If no task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn get_by_id(&self, id: i64) -> Result<Option<Task>>;

    /// List all tasks ordered by ascending ID
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - All tasks (may be empty)
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Overwrite title and completed for the row matching `task.id`
    ///
    /// Never inserts a row.
    ///
    /// # Returns
    /// * `Ok(true)` - A row was updated
    /// * `Ok(false)` - No task exists with that ID
    /// * `Err(TaskError::Validation)` - If the new title is empty
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn update(&self, task: &Task) -> Result<bool>;

    /// Delete the task matching `id`
    ///
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - No task exists with that ID
    /// * `Err(TaskError::Database)` - If the database operation fails
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Get repository health status for monitoring
    ///
    /// # Returns
    /// * `Ok(())` - Repository is healthy and connected
    /// * `Err(TaskError::Database)` - Repository is unhealthy
    async fn health_check(&self) -> Result<()>;
}
