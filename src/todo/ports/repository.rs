//! Repository port for todo persistence.

use crate::todo::domain::{Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Implementations make no ordering promise for [`TodoRepository::find_all`]
/// unless they document one.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts the todo, or overwrites the stored todo with the same
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError`] when the backend rejects the write.
    async fn save(&self, todo: &Todo) -> TodoRepositoryResult<()>;

    /// Finds a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no todo has the
    /// identifier.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Todo>;

    /// Returns every stored todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError`] when the backend cannot be read.
    async fn find_all(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Removes a todo by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when no todo has the
    /// identifier.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// The backend cannot serve requests.
    #[error("todo repository unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Reports an unavailable backend.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}
