//! HTTP server for the to-do CRUD API
//!
//! Translates HTTP verbs, paths, and JSON bodies into repository calls
//! and back into JSON responses with matching status codes.

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::info;

use crate::routes::{
    create_task, delete_task, get_task, health, invalid_path, list_tasks, task_id_required,
    update_task, ApiState,
};
use todo_core::TaskRepository;

/// HTTP server wrapping a task repository
pub struct HttpServer<R> {
    repository: Arc<R>,
}

impl<R: TaskRepository + 'static> HttpServer<R> {
    /// Create a new server around the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Build the router with all endpoints
    pub fn router(self) -> Router {
        let state = Arc::new(ApiState {
            repository: self.repository,
        });

        Router::new()
            .route(
                "/tasks",
                get(list_tasks::<R>)
                    .post(create_task::<R>)
                    .put(task_id_required)
                    .delete(task_id_required),
            )
            .route(
                "/tasks/:id",
                get(get_task::<R>)
                    .put(update_task::<R>)
                    .delete(delete_task::<R>),
            )
            .route("/health", get(health::<R>))
            .fallback(invalid_path)
            .layer(middleware::from_fn(
                crate::request_log::request_logging_middleware,
            ))
            .with_state(state)
    }

    /// Bind the address and serve requests until the task is cancelled
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting HTTP server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
