//! HTTP backend for a single "todo" resource.
//!
//! # Overview
//! Five CRUD endpoints under `/api/todos`, backed by a pluggable
//! `TodoRepository`. Handlers delegate to `TodoService`, which maps the wire
//! DTO onto stored records and reports unknown ids as `NotFound`.
//!
//! # Design
//! - `app()` wires an in-memory repository; `router()` accepts any service,
//!   so tests and alternative stores share the same routes.
//! - Errors from every layer convert into `HttpError`, the only type
//!   handlers return on failure.
//! - The OpenAPI description is a static file served verbatim.

use std::future::Future;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use dto::TodoDto;
pub use error::HttpError;
pub use repository::{InMemoryTodoRepository, NewTodo, RepositoryError, TodoRecord, TodoRepository};
pub use service::{ServiceError, TodoService};
pub use state::AppState;

/// OpenAPI 3.0 description of the todo API.
pub const OPENAPI_JSON: &str = include_str!("../openapi.json");

/// Router backed by a fresh, empty in-memory store.
pub fn app() -> Router {
    router(TodoService::new(Arc::new(InMemoryTodoRepository::new())))
}

pub fn router(service: TodoService) -> Router {
    let state: AppState = Arc::new(service);
    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route(
            "/api/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/api-docs/openapi.json", get(handlers::openapi_document))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_shutdown(listener, app(), std::future::pending()).await
}

/// Serve `router` until `shutdown` resolves, letting in-flight requests finish.
pub async fn run_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
