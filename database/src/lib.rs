//! Database crate for the to-do service
//!
//! This crate provides the SQLite implementation of the TaskRepository
//! trait, offering task persistence with connection pooling and
//! parameterized statements.
//!
//! # Features
//!
//! - SQLite database support with WAL mode for better concurrency
//! - Idempotent schema creation (`ensure_schema`)
//! - Connection pooling with single-connection handling for `:memory:`
//! - Error mapping from sqlx to the domain error taxonomy
//!
//! # Usage
//!
//! ```rust
//! use todo_database::SqliteTaskRepository;
//! use todo_core::repository::TaskRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create repository (in-memory for testing)
//!     let repo = SqliteTaskRepository::new(":memory:", 1).await?;
//!
//!     // Ensure the tasks table exists
//!     repo.ensure_schema().await?;
//!
//!     // Repository is ready to use
//!     repo.health_check().await?;
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::SqliteTaskRepository;

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TaskError},
    models::{NewTask, Task},
    repository::TaskRepository,
};
