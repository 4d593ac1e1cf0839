//! In-memory adapters for the todo context.

mod todo;

pub use todo::InMemoryTodoRepository;
