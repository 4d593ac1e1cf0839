//! Response projections returned by the todo use cases.

use crate::todo::domain::{Todo, TodoPriority, TodoStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a todo as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TodoResponse {
    /// Todo identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Lifecycle state.
    pub status: TodoStatus,
    /// Priority.
    pub priority: TodoPriority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Completion timestamp, present only for completed todos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id().to_string(),
            title: todo.title().to_owned(),
            description: todo.description().to_owned(),
            status: todo.status(),
            priority: todo.priority(),
            created_at: todo.created_at(),
            updated_at: todo.updated_at(),
            completed_at: todo.completed_at(),
        }
    }
}

/// Collection of todo snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListResponse {
    /// Snapshots in repository order.
    pub todos: Vec<TodoResponse>,
    /// Number of snapshots.
    pub count: usize,
}

impl FromIterator<TodoResponse> for TodoListResponse {
    fn from_iter<I: IntoIterator<Item = TodoResponse>>(iter: I) -> Self {
        let todos: Vec<TodoResponse> = iter.into_iter().collect();
        let count = todos.len();
        Self { todos, count }
    }
}
