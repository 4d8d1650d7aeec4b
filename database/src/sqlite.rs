use crate::common::{row_to_task, sqlx_error_to_task_error};
use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Row, Sqlite, SqlitePool};
use todo_core::{
    error::{Result, TaskError},
    models::{validate_title, NewTask, Task},
    repository::TaskRepository,
};

/// SQLite implementation of the TaskRepository trait
///
/// Provides task persistence using SQLite with connection pooling and
/// parameterized statements. Every operation borrows a pool connection
/// only for its own statement scope; no connection or transaction is
/// held across operations, so concurrent callers rely entirely on
/// SQLite's single-statement atomicity.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new SQLite repository with the given database URL
    ///
    /// # Arguments
    /// * `database_url` - SQLite database URL (file path or `:memory:`)
    /// * `max_connections` - Maximum pool size for file-based databases
    ///
    /// # Returns
    /// * `Ok(SqliteTaskRepository)` - Successfully connected repository
    /// * `Err(TaskError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use todo_database::SqliteTaskRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let repo = SqliteTaskRepository::new(":memory:", 1).await?;
    ///
    /// // File-based database
    /// let repo = SqliteTaskRepository::new("sqlite:///tmp/todo.db", 5).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        // Handle different database URL formats
        let db_url = if database_url.starts_with(":memory:") {
            database_url.to_string()
        } else if database_url.starts_with("sqlite://") {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        // Create database if it doesn't exist (for file-based databases)
        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            match Sqlite::create_database(&db_url).await {
                Ok(_) => tracing::info!("Database created successfully"),
                Err(error) => {
                    tracing::error!("Error creating database: {}", error);
                    return Err(TaskError::Database(format!(
                        "Failed to create database: {error}"
                    )));
                }
            }
        }

        let is_memory = db_url.contains(":memory:");

        let connect_options = if is_memory {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
        };

        // An in-memory database exists per connection, so the pool must
        // stay at a single connection or the schema vanishes between
        // statements.
        let pool_size = if is_memory { 1 } else { max_connections.max(1) };

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .connect_with(connect_options)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(Self { pool })
    }

    /// Ensure the tasks table exists
    ///
    /// Idempotent; safe to call on every process start. Called once at
    /// bootstrap rather than on every repository construction.
    ///
    /// # Returns
    /// * `Ok(())` - Schema is present
    /// * `Err(TaskError::Database)` - If the DDL statement fails
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (\
             id INTEGER PRIMARY KEY AUTOINCREMENT, \
             title TEXT NOT NULL, \
             completed BOOLEAN NOT NULL DEFAULT 0)",
        )
        .execute(&self.pool)
        .await
        .map_err(sqlx_error_to_task_error)?;

        tracing::info!("Database schema ensured");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: NewTask) -> Result<Task> {
        let title = validate_title(&task.title)?;

        // The insert and the generated-id lookup must share a connection;
        // last_insert_rowid() is per-connection state and would race
        // across the pool otherwise.
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(sqlx_error_to_task_error)?;

        let row = sqlx::query("INSERT INTO tasks (title, completed) VALUES (?, ?) RETURNING id")
            .bind(&title)
            .bind(false)
            .fetch_optional(&mut *conn)
            .await
            .map_err(sqlx_error_to_task_error)?;

        let id: i64 = match row {
            Some(row) => row.get("id"),
            None => {
                // Fallback for drivers that do not surface RETURNING rows
                let row = sqlx::query("SELECT last_insert_rowid()")
                    .fetch_one(&mut *conn)
                    .await
                    .map_err(sqlx_error_to_task_error)?;
                row.get(0)
            }
        };

        if id <= 0 {
            return Err(TaskError::Database(
                "Failed to create task, no ID generated".to_string(),
            ));
        }

        Ok(Task {
            id,
            title,
            completed: false,
        })
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let result = sqlx::query("SELECT id, title, completed FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        match result {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query("SELECT id, title, completed FROM tasks ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            tasks.push(row_to_task(&row)?);
        }

        Ok(tasks)
    }

    async fn update(&self, task: &Task) -> Result<bool> {
        let title = validate_title(&task.title)?;

        let result = sqlx::query("UPDATE tasks SET title = ?, completed = ? WHERE id = ?")
            .bind(&title)
            .bind(task.completed)
            .bind(task.id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_task_error)?;

        Ok(())
    }
}
