//! Domain model for the todo context.
//!
//! The aggregate, its lifecycle types, the shared field rules and the error
//! catalogue live here, free of any infrastructure concern.

mod error;
mod ids;
pub mod rules;
mod todo;

pub use error::{
    DomainError, DomainErrorResponse, ErrorCategory, ErrorDescriptor, ErrorKind, TodoResult,
};
pub use ids::{ParseTodoIdError, TodoId};
pub use todo::{
    ParseTodoPriorityError, ParseTodoStatusError, PersistedTodoData, Todo, TodoPriority,
    TodoStatus,
};
