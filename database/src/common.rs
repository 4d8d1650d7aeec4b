use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Convert a SQLite row to a Task model
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.get("id"),
        title: row.get("title"),
        completed: row.get("completed"),
    })
}

/// Convert a SQLx error to a TaskError
pub fn sqlx_error_to_task_error(err: sqlx::Error) -> TaskError {
    match &err {
        sqlx::Error::Database(db_err) => {
            TaskError::Database(format!("Database constraint error: {}", db_err.message()))
        }
        sqlx::Error::RowNotFound => {
            // "Not found" is handled at the application level via Option,
            // so a RowNotFound surfacing here is a genuine fault.
            TaskError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::PoolTimedOut => TaskError::Database("Connection pool timeout".to_string()),
        sqlx::Error::Io(io_err) => TaskError::Database(format!("Database I/O error: {io_err}")),
        _ => TaskError::Database(format!("Database operation failed: {err}")),
    }
}
