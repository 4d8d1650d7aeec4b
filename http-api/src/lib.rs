//! HTTP API crate for the to-do service
//!
//! Exposes the task CRUD operations over HTTP/JSON:
//!
//! - `GET /tasks` / `GET /tasks/{id}` - read
//! - `POST /tasks` - create
//! - `PUT /tasks/{id}` - update
//! - `DELETE /tasks/{id}` - delete
//! - `GET /health` - storage connectivity probe
//!
//! All error responses use the fixed shape `{"error": "<message>"}`;
//! the delete confirmation uses `{"message": "<message>"}`.

pub mod error;
pub mod request_log;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody, MessageBody};
pub use server::HttpServer;
