//! Request payloads accepted by the todo use cases.

use crate::todo::domain::TodoId;

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateTodoRequest {
    /// Title of the new todo.
    pub title: String,
    /// Description, empty when none is given.
    pub description: String,
    /// Priority string; `None` or empty selects `medium`.
    pub priority: Option<String>,
}

impl CreateTodoRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority string.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Request payload for a partial todo update.
///
/// Fields left as `None` or set to the empty string are not changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    /// Identifier of the todo to update.
    pub id: TodoId,
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement priority string.
    pub priority: Option<String>,
}

impl UpdateTodoRequest {
    /// Creates an update request that changes nothing yet.
    #[must_use]
    pub const fn new(id: TodoId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            priority: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement priority string.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}
