//! Persistence port for todos and its in-memory implementation.
//!
//! # Design
//! The service only sees `TodoRepository`; storage details stay behind the
//! trait. `InMemoryTodoRepository` keeps records in a `BTreeMap` so listing
//! is naturally ordered by id, and hands out ids from a counter that is never
//! rewound, so a deleted id is not reissued.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

/// A persisted todo. Always carries its store-assigned id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Fields of a todo that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Errors raised by a repository implementation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record with the given id exists.
    #[error("todo {0} not found")]
    NotFound(i64),

    /// The backing store failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// CRUD access to stored todos.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All records, ordered by ascending id.
    async fn list(&self) -> Result<Vec<TodoRecord>, RepositoryError>;

    /// The record with `id`, or `None` if there is none.
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError>;

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Store a new record and return it with its assigned id.
    async fn insert(&self, todo: NewTodo) -> Result<TodoRecord, RepositoryError>;

    /// Replace the stored record with the same id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist;
    /// never inserts.
    async fn update(&self, todo: TodoRecord) -> Result<TodoRecord, RepositoryError>;

    /// Remove the record with `id`.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the record doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    todos: BTreeMap<i64, TodoRecord>,
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    store: RwLock<Store>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                todos: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> Result<Vec<TodoRecord>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.todos.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoRecord>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.todos.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.todos.contains_key(&id))
    }

    async fn insert(&self, todo: NewTodo) -> Result<TodoRecord, RepositoryError> {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("id space exhausted".to_string()))?;

        let record = TodoRecord {
            id,
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        };
        store.todos.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, todo: TodoRecord) -> Result<TodoRecord, RepositoryError> {
        let mut store = self.store.write().await;
        let slot = store
            .todos
            .get_mut(&todo.id)
            .ok_or(RepositoryError::NotFound(todo.id))?;
        *slot = todo.clone();
        Ok(todo)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
