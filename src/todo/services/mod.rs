//! Application services for todo use-case orchestration.

mod requests;
mod responses;
mod todo_service;

pub use requests::{CreateTodoRequest, UpdateTodoRequest};
pub use responses::{TodoListResponse, TodoResponse};
pub use todo_service::TodoService;
