//! To-Do Core Library
//!
//! This crate provides the domain models, error taxonomy, and trait
//! interfaces for the to-do service. All other crates depend on the
//! types and interfaces defined here.
//!
//! # Architecture
//!
//! - [`models`] - Core domain models (Task, NewTask)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for data persistence
//!
//! # Example
//!
//! ```rust
//! use todo_core::models::{validate_title, NewTask};
//!
//! let new_task = NewTask::new("Buy milk");
//! assert!(validate_title(&new_task.title).is_ok());
//! ```

pub mod error;
pub mod models;
pub mod repository;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TaskError};
pub use models::{validate_title, NewTask, Task};
pub use repository::TaskRepository;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_crate_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "todo-core");
    }

    #[test]
    fn test_re_exports() {
        let error = TaskError::not_found_id(1);
        assert!(error.is_not_found());

        let task = NewTask::new("check re-exports");
        assert_eq!(task.title, "check re-exports");
    }
}
