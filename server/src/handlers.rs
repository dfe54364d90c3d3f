//! Request handlers for `/api/todos`.
//!
//! Extractor rejections are taken as `Result` so that malformed ids and
//! bodies go through `HttpError` and come back as 400 with a JSON body.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;

use crate::dto::TodoDto;
use crate::error::HttpError;
use crate::state::AppState;

pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<TodoDto>>, HttpError> {
    Ok(Json(state.find_all().await?))
}

pub async fn get_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TodoDto>, HttpError> {
    let Path(id) = id?;
    state
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("todo {id} not found")))
}

pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<TodoDto>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoDto>), HttpError> {
    let Json(dto) = payload?;
    let created = state.save(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TodoDto>, JsonRejection>,
) -> Result<Json<TodoDto>, HttpError> {
    let Path(id) = id?;
    let Json(dto) = payload?;
    Ok(Json(state.update(id, dto).await?))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, HttpError> {
    let Path(id) = id?;
    state.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Static OpenAPI document describing this API.
pub async fn openapi_document() -> ([(HeaderName, &'static str); 1], &'static str) {
    (
        [(header::CONTENT_TYPE, "application/json")],
        crate::OPENAPI_JSON,
    )
}
