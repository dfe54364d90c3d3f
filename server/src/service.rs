//! Application service: maps DTOs to stored records and back.
//!
//! `update` and `delete` confirm the record exists before touching the store,
//! so an unknown id is reported as `NotFound` and never upserted.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::dto::TodoDto;
use crate::repository::{RepositoryError, TodoRepository};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The targeted todo does not exist.
    #[error("todo {0} not found")]
    NotFound(i64),

    /// The payload is well-formed JSON but not an acceptable todo.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Todo operations shared by all request handlers.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<TodoDto>, ServiceError> {
        let records = self.repository.list().await?;
        debug!(count = records.len(), "listed todos");
        Ok(records.into_iter().map(TodoDto::from).collect())
    }

    /// `Ok(None)` when no todo has this id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<TodoDto>, ServiceError> {
        let found = self.repository.find_by_id(id).await?;
        debug!(id, found = found.is_some(), "looked up todo");
        Ok(found.map(TodoDto::from))
    }

    pub async fn save(&self, dto: TodoDto) -> Result<TodoDto, ServiceError> {
        validate(&dto)?;
        let record = self.repository.insert(dto.into_new_todo()).await?;
        debug!(id = record.id, "created todo");
        Ok(record.into())
    }

    pub async fn update(&self, id: i64, dto: TodoDto) -> Result<TodoDto, ServiceError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        validate(&dto)?;

        let record = self.repository.update(dto.apply_to(existing)).await?;
        debug!(id, "updated todo");
        Ok(record.into())
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repository.exists(id).await? {
            return Err(ServiceError::NotFound(id));
        }
        self.repository.delete(id).await?;
        debug!(id, "deleted todo");
        Ok(())
    }
}

fn validate(dto: &TodoDto) -> Result<(), ServiceError> {
    if dto.title.is_empty() {
        return Err(ServiceError::InvalidInput("title must not be empty".to_string()));
    }
    Ok(())
}
