//! Inbound port consumed by transport adapters.

use crate::todo::{
    domain::{DomainError, TodoId, TodoResult},
    services::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest},
};
use async_trait::async_trait;

/// Todo use cases.
///
/// Every operation returns either its success value or a single
/// [`DomainError`].
#[async_trait]
pub trait TodoUseCase: Send + Sync {
    /// Creates a todo and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad fields or a repository error when
    /// the todo cannot be stored.
    async fn create_todo(&self, request: CreateTodoRequest) -> TodoResult<TodoId>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns a validation, not-found or repository error.
    async fn update_todo(&self, request: UpdateTodoRequest) -> TodoResult<()>;

    /// Marks a todo as completed.
    ///
    /// # Errors
    ///
    /// Returns a not-found, operation or repository error.
    async fn complete_todo(&self, id: TodoId) -> TodoResult<()>;

    /// Archives a todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found, operation or repository error.
    async fn archive_todo(&self, id: TodoId) -> TodoResult<()>;

    /// Deletes a todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found or repository error.
    async fn delete_todo(&self, id: TodoId) -> TodoResult<()>;

    /// Returns a snapshot of one todo.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the todo does not exist.
    async fn get_todo(&self, id: TodoId) -> TodoResult<TodoResponse>;

    /// Returns snapshots of every todo.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the todos cannot be read.
    async fn list_todos(&self) -> TodoResult<TodoListResponse>;

    /// Returns the diagnostic sentinel error.
    fn trigger_test_error(&self) -> DomainError;
}
