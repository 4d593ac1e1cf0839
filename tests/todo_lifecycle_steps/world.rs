//! Shared world state for todo lifecycle BDD scenarios.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use todo_ddd::todo::{
    adapters::memory::InMemoryTodoRepository,
    domain::{DomainError, TodoId},
    services::TodoService,
    validation::DefaultTodoValidator,
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTodoRepository, DefaultTodoValidator, DefaultClock>;

/// Scenario world for todo lifecycle behaviour tests.
pub struct TodoWorld {
    pub service: TestTodoService,
    pub current_id: Option<TodoId>,
    pub last_result: Option<Result<(), DomainError>>,
}

impl TodoWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let service = TodoService::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(DefaultTodoValidator::new()),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            current_id: None,
            last_result: None,
        }
    }

    /// Returns the todo the scenario is working on.
    ///
    /// # Errors
    ///
    /// Returns an error when no todo has been created yet.
    pub fn current_id(&self) -> Result<TodoId, eyre::Report> {
        self.current_id
            .ok_or_else(|| eyre::eyre!("missing current todo in scenario world"))
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
