use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use todo_database::{NewTask, SqliteTaskRepository, TaskRepository};
use todo_http::HttpServer;
use tracing::info;

use crate::config::Config;

/// Create the task repository and ensure the schema exists
pub async fn create_repository(config: &Config) -> Result<Arc<SqliteTaskRepository>> {
    info!("Creating task repository");

    let database_url = config.database_url();
    info!("Initializing SQLite repository at: {}", database_url);

    let repo = SqliteTaskRepository::new(&database_url, config.database.max_connections)
        .await
        .context("Failed to create SQLite repository")?;

    // One idempotent DDL call at startup; repeated runs are harmless
    repo.ensure_schema()
        .await
        .context("Failed to ensure database schema")?;

    info!("Task repository created successfully");
    Ok(Arc::new(repo))
}

/// Insert sample tasks when the table is empty (first run only)
pub async fn seed_sample_tasks(repo: &SqliteTaskRepository) -> Result<()> {
    let existing = repo
        .list_all()
        .await
        .context("Failed to check for existing tasks")?;
    if !existing.is_empty() {
        info!(count = existing.len(), "Table already has tasks, skipping seed");
        return Ok(());
    }

    info!("Seeding sample tasks");
    for title in ["Learn Rust", "Build TODO app"] {
        let task = repo
            .create(NewTask::new(title))
            .await
            .with_context(|| format!("Failed to seed task '{title}'"))?;
        info!(id = task.id, title = %task.title, "Seeded task");
    }

    Ok(())
}

/// Initialize the complete application
pub async fn initialize_app(config: &Config, seed: bool) -> Result<HttpServer<SqliteTaskRepository>> {
    info!("Initializing application");

    let repository = create_repository(config)
        .await
        .context("Failed to create repository")?;

    if seed {
        seed_sample_tasks(&repository)
            .await
            .context("Failed to seed sample tasks")?;
    }

    let server = HttpServer::new(repository);

    info!("Application initialized successfully");
    Ok(server)
}

/// Ensure the database directory exists using config
pub fn ensure_database_directory_from_config(config: &Config) -> Result<()> {
    let database_url = config.database_url();
    ensure_database_directory(&database_url)
}

/// Ensure the database directory exists
pub fn ensure_database_directory(database_url: &str) -> Result<()> {
    if let Some(db_path) = database_url.strip_prefix("sqlite://") {
        let db_path = Path::new(db_path);

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory {}", parent.display())
                })?;
                info!("Created database directory: {}", parent.display());
            }
        }
    }

    Ok(())
}
