//! Service layer coordinating validation, aggregate behaviour and
//! persistence for each todo use case.

use super::{CreateTodoRequest, TodoListResponse, TodoResponse, UpdateTodoRequest};
use crate::todo::{
    domain::{DomainError, ErrorKind, Todo, TodoId, TodoPriority, TodoResult, rules},
    ports::{TodoRepository, TodoRepositoryError, TodoUseCase, TodoValidator},
    validation::service::supplied,
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Todo use-case orchestration service.
///
/// Holds no mutable state of its own; all state lives in the repository, so
/// one instance can serve concurrent callers.
#[derive(Clone)]
pub struct TodoService<R, V, C>
where
    R: TodoRepository,
    V: TodoValidator,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    validator: Arc<V>,
    clock: Arc<C>,
}

impl<R, V, C> TodoService<R, V, C>
where
    R: TodoRepository,
    V: TodoValidator,
    C: Clock + Send + Sync,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>, validator: Arc<V>, clock: Arc<C>) -> Self {
        Self {
            repository,
            validator,
            clock,
        }
    }

    async fn load(&self, id: TodoId, operation: &'static str) -> TodoResult<Todo> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| translate(err, ErrorKind::FailedToRetrieveTodos, operation))
    }

    async fn store(
        &self,
        todo: &Todo,
        on_failure: ErrorKind,
        operation: &'static str,
    ) -> TodoResult<()> {
        self.repository
            .save(todo)
            .await
            .map_err(|err| translate(err, on_failure, operation))
    }
}

#[async_trait]
impl<R, V, C> TodoUseCase for TodoService<R, V, C>
where
    R: TodoRepository,
    V: TodoValidator,
    C: Clock + Send + Sync,
{
    async fn create_todo(&self, request: CreateTodoRequest) -> TodoResult<TodoId> {
        let CreateTodoRequest {
            title,
            description,
            priority,
        } = request;
        self.validator
            .validate_create(&title, &description, priority.as_deref())?;
        let resolved_priority = resolve_priority(priority.as_deref())?;

        let todo = Todo::new(title, description, resolved_priority, &*self.clock)?;
        self.store(&todo, ErrorKind::FailedToSaveTodo, "create_todo")
            .await?;
        info!(todo_id = %todo.id(), priority = %todo.priority(), "todo created");
        Ok(todo.id())
    }

    async fn update_todo(&self, request: UpdateTodoRequest) -> TodoResult<()> {
        let UpdateTodoRequest {
            id,
            title,
            description,
            priority,
        } = request;
        self.validator.validate_update(
            title.as_deref(),
            description.as_deref(),
            priority.as_deref(),
        )?;

        let mut todo = self.load(id, "update_todo").await?;
        if let Some(value) = supplied(title.as_deref()) {
            todo.update_title(value, &*self.clock)?;
        }
        if let Some(value) = supplied(description.as_deref()) {
            todo.update_description(value, &*self.clock)?;
        }
        if let Some(value) = supplied(priority.as_deref()) {
            todo.update_priority(rules::parse_priority(value)?, &*self.clock);
        }

        self.store(&todo, ErrorKind::FailedToSaveTodo, "update_todo")
            .await?;
        debug!(todo_id = %id, "todo updated");
        Ok(())
    }

    async fn complete_todo(&self, id: TodoId) -> TodoResult<()> {
        let mut todo = self.load(id, "complete_todo").await?;
        todo.mark_completed(&*self.clock)?;
        self.store(&todo, ErrorKind::FailedToSaveCompletedTodo, "complete_todo")
            .await?;
        info!(todo_id = %id, "todo completed");
        Ok(())
    }

    async fn archive_todo(&self, id: TodoId) -> TodoResult<()> {
        let mut todo = self.load(id, "archive_todo").await?;
        todo.archive(&*self.clock)?;
        self.store(&todo, ErrorKind::FailedToSaveArchivedTodo, "archive_todo")
            .await?;
        info!(todo_id = %id, "todo archived");
        Ok(())
    }

    async fn delete_todo(&self, id: TodoId) -> TodoResult<()> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| translate(err, ErrorKind::FailedToDeleteTodo, "delete_todo"))?;
        info!(todo_id = %id, "todo deleted");
        Ok(())
    }

    async fn get_todo(&self, id: TodoId) -> TodoResult<TodoResponse> {
        let todo = self.load(id, "get_todo").await?;
        Ok(TodoResponse::from(&todo))
    }

    async fn list_todos(&self) -> TodoResult<TodoListResponse> {
        let todos = self
            .repository
            .find_all()
            .await
            .map_err(|err| translate(err, ErrorKind::FailedToRetrieveTodos, "list_todos"))?;
        Ok(todos.iter().map(TodoResponse::from).collect())
    }

    fn trigger_test_error(&self) -> DomainError {
        ErrorKind::TestError.into()
    }
}

/// Resolves the priority of a new todo; absent or empty selects the default.
fn resolve_priority(priority: Option<&str>) -> TodoResult<TodoPriority> {
    supplied(priority).map_or(Ok(TodoPriority::default()), rules::parse_priority)
}

/// Maps a repository failure onto the domain error catalogue.
///
/// The underlying cause is logged and dropped.
fn translate(
    err: TodoRepositoryError,
    on_persistence_failure: ErrorKind,
    operation: &'static str,
) -> DomainError {
    match err {
        TodoRepositoryError::NotFound(id) => {
            DomainError::from(ErrorKind::TodoNotFound).with_detail("id", id.to_string())
        }
        TodoRepositoryError::Unavailable(reason) => {
            warn!(operation, %reason, "todo repository unavailable");
            DomainError::from(ErrorKind::RepositoryNotInitialized)
                .with_detail("operation", operation)
        }
        TodoRepositoryError::Persistence(source) => {
            warn!(operation, error = %source, "todo repository operation failed");
            DomainError::from(on_persistence_failure).with_detail("operation", operation)
        }
    }
}
