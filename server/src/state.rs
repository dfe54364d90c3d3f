//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::service::TodoService;

pub type AppState = Arc<TodoService>;
