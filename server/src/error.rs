//! HTTP-facing error type and its mapping to status codes.
//!
//! Every failure a handler can produce ends up as an `HttpError`, which
//! renders as `{"error": "...", "status": <code>}`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::repository::RepositoryError;
use crate::service::ServiceError;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or unacceptable request.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let message = match self {
            HttpError::NotFound(msg) | HttpError::BadRequest(msg) | HttpError::Internal(msg) => {
                msg
            }
        };
        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => HttpError::NotFound(format!("todo {id} not found")),
            ServiceError::InvalidInput(msg) => HttpError::BadRequest(msg),
            ServiceError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => HttpError::NotFound(format!("todo {id} not found")),
            RepositoryError::Storage(msg) => HttpError::Internal(format!("Storage: {msg}")),
        }
    }
}

// axum answers some body problems with 415/422; this API reports all of them as 400.
impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_not_found_maps_to_404() {
        let err: HttpError = ServiceError::NotFound(3).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found: todo 3 not found");
    }

    #[test]
    fn invalid_input_maps_to_400() {
        let err: HttpError = ServiceError::InvalidInput("title must not be empty".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failure_maps_to_500() {
        let err: HttpError =
            ServiceError::Repository(RepositoryError::Storage("disk gone".into())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn response_carries_status_in_body() {
        let response = HttpError::NotFound("todo 1 not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
