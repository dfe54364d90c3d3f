//! Stateless HTTP request builder and response parser for the todo API.
//!
//! Each CRUD operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Todo, TodoInput};

const TODOS_PATH: &str = "/api/todos";

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        let body = to_json(input)?;
        Ok(HttpRequest::json(HttpMethod::Put, self.item_url(id), body))
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        HttpRequest::bodyless(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        from_json(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }

    fn collection_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}{TODOS_PATH}/{id}", self.base_url)
    }
}

fn to_json(input: &TodoInput) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::InvalidInput {
            body: response.body.clone(),
        }),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
