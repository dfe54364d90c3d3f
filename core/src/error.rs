//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` and `InvalidInput` get dedicated variants because they are the
//! two failures the API documents. Any other unexpected status lands in
//! `HttpError` with the raw status code and body for debugging.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400 and rejected the request.
    #[error("invalid input: {body}")]
    InvalidInput { body: String },

    /// The server returned an unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
