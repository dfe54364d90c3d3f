//! Typed client for the `/api/todos` HTTP API.
//!
//! The crate never opens a socket. `TodoClient::build_*` turns a call into an
//! `HttpRequest`, the host sends it with its own HTTP stack, and
//! `TodoClient::parse_*` turns the `HttpResponse` back into a `Todo` or an
//! `ApiError`. 404 and 400 map to `ApiError::NotFound` and
//! `ApiError::InvalidInput`.
//!
//! `Todo` and `TodoInput` are declared here rather than shared with
//! `todo-server`; the live-server test in `tests/integration.rs` keeps the
//! two schemas in step.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Todo, TodoInput};
