//! Shared test helpers for in-memory integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use todo_ddd::todo::{
    adapters::memory::InMemoryTodoRepository, services::TodoService,
    validation::DefaultTodoValidator,
};

/// Service wired to the in-memory repository and the system clock.
pub type InMemoryService = TodoService<InMemoryTodoRepository, DefaultTodoValidator, DefaultClock>;

/// Provides a fresh in-memory repository for each test.
#[fixture]
pub fn repo() -> InMemoryTodoRepository {
    InMemoryTodoRepository::new()
}

/// Provides a service over a fresh repository.
#[fixture]
pub fn service() -> InMemoryService {
    TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultTodoValidator::new()),
        Arc::new(DefaultClock),
    )
}
