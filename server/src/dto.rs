//! Wire representation of a todo.
//!
//! # Design
//! A single flat DTO is used for both directions. Inbound payloads may omit
//! `id` (it is ignored on create and overridden by the path on update);
//! outbound payloads always carry the id assigned by the store.

use serde::{Deserialize, Serialize};

use crate::repository::{NewTodo, TodoRecord};

/// A todo as it crosses the HTTP boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl TodoDto {
    /// Fields for a record that does not exist yet. Any client-supplied id is
    /// dropped here.
    pub fn into_new_todo(self) -> NewTodo {
        NewTodo {
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }

    /// Overwrite every mutable field of `record` with this payload, keeping
    /// the record's id.
    pub fn apply_to(self, record: TodoRecord) -> TodoRecord {
        TodoRecord {
            id: record.id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}

impl From<TodoRecord> for TodoDto {
    fn from(record: TodoRecord) -> Self {
        Self {
            id: Some(record.id),
            title: record.title,
            description: record.description,
            completed: record.completed,
        }
    }
}
