//! Volatile in-memory todo repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// A single reader/writer lock guards the map: lookups share the read lock
/// and writes take the write lock. `find_all` returns todos in no particular
/// order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<HashMap<TodoId, Todo>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl std::fmt::Display) -> TodoRepositoryError {
    TodoRepositoryError::unavailable(format!("todo map lock poisoned: {err}"))
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn save(&self, todo: &Todo) -> TodoRepositoryResult<()> {
        let mut todos = self.todos.write().map_err(|err| poisoned(&err))?;
        todos.insert(todo.id(), todo.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Todo> {
        let todos = self.todos.read().map_err(|err| poisoned(&err))?;
        todos
            .get(&id)
            .cloned()
            .ok_or(TodoRepositoryError::NotFound(id))
    }

    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let todos = self.todos.read().map_err(|err| poisoned(&err))?;
        Ok(todos.values().cloned().collect())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut todos = self.todos.write().map_err(|err| poisoned(&err))?;
        todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
