//! Todo aggregate root and its lifecycle types.

use super::{DomainError, ErrorKind, TodoId, TodoResult, rules};
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Todo lifecycle state.
///
/// `Pending` moves to `Completed` or `Archived`; `Completed` moves to
/// `Archived`; `Archived` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Work has not been finished.
    Pending,
    /// Work has been finished.
    Completed,
    /// The todo has been put away.
    Archived,
}

impl TodoStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    /// Returns `true` if no transition may leave this state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoStatus {
    type Error = ParseTodoStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "archived" => Ok(Self::Archived),
            _ => Err(ParseTodoStatusError(value.to_owned())),
        }
    }
}

/// Todo priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    /// Low priority.
    Low,
    /// Medium priority, used when none is given.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl TodoPriority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TodoPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TodoPriority {
    type Error = ParseTodoPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTodoPriorityError(value.to_owned())),
        }
    }
}

/// Error returned while parsing todo states from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo status: {0}")]
pub struct ParseTodoStatusError(pub String);

/// Error returned while parsing todo priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown todo priority: {0}")]
pub struct ParseTodoPriorityError(pub String);

/// Todo aggregate root.
///
/// Fields are private; every change goes through a behavioural method that
/// enforces the aggregate invariants and refreshes `updated_at`. A rejected
/// mutation leaves the aggregate untouched.
///
/// There is no serde form; stored todos are rebuilt with
/// [`Todo::from_persisted`] and callers see [`TodoResponse`].
///
/// ```compile_fail
/// fn decodable<T: serde::de::DeserializeOwned>() {}
/// decodable::<todo_ddd::todo::domain::Todo>();
/// ```
///
/// [`TodoResponse`]: crate::todo::services::TodoResponse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    description: String,
    priority: TodoPriority,
    status: TodoStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted todo aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTodoData {
    /// Persisted todo identifier.
    pub id: TodoId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted priority.
    pub priority: TodoPriority,
    /// Persisted lifecycle state.
    pub status: TodoStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new pending todo.
    ///
    /// # Errors
    ///
    /// Returns a validation [`DomainError`] when the title or description
    /// break the field rules.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TodoPriority,
        clock: &impl Clock,
    ) -> TodoResult<Self> {
        let title_value = title.into();
        let description_value = description.into();
        rules::validate_title(&title_value)?;
        rules::validate_description(&description_value)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: TodoId::new(),
            title: title_value,
            description: description_value,
            priority,
            status: TodoStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
            completed_at: None,
        })
    }

    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTodoData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            priority: data.priority,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TodoPriority {
        self.priority
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn status(&self) -> TodoStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the completion timestamp, if completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` while the todo is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == TodoStatus::Pending
    }

    /// Returns `true` once the todo is completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TodoStatus::Completed
    }

    /// Returns `true` once the todo is archived.
    #[must_use]
    pub fn is_archived(&self) -> bool {
        self.status == TodoStatus::Archived
    }

    /// Marks the todo as completed and records the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CannotCompleteTodo`] when the todo is already
    /// completed or archived.
    pub fn mark_completed(&mut self, clock: &impl Clock) -> TodoResult<()> {
        if self.status != TodoStatus::Pending {
            return Err(self.rejected_transition(ErrorKind::CannotCompleteTodo, TodoStatus::Completed));
        }
        let timestamp = clock.utc();
        self.status = TodoStatus::Completed;
        self.completed_at = Some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    /// Resets the todo to pending and clears the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CannotReopenTodo`] when the todo is completed or
    /// archived.
    pub fn mark_pending(&mut self, clock: &impl Clock) -> TodoResult<()> {
        if self.status != TodoStatus::Pending {
            return Err(self.rejected_transition(ErrorKind::CannotReopenTodo, TodoStatus::Pending));
        }
        self.completed_at = None;
        self.touch(clock);
        Ok(())
    }

    /// Archives the todo. Archiving clears the completion time.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CannotArchiveTodo`] when the todo is already
    /// archived.
    pub fn archive(&mut self, clock: &impl Clock) -> TodoResult<()> {
        if self.status.is_terminal() {
            return Err(self.rejected_transition(ErrorKind::CannotArchiveTodo, TodoStatus::Archived));
        }
        self.status = TodoStatus::Archived;
        self.completed_at = None;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::EmptyTitle`] or [`ErrorKind::TitleTooLong`] when
    /// the title breaks the title rule.
    pub fn update_title(&mut self, title: impl Into<String>, clock: &impl Clock) -> TodoResult<()> {
        let value = title.into();
        rules::validate_title(&value)?;
        self.title = value;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the description.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDescription`] when the description is too
    /// long.
    pub fn update_description(
        &mut self,
        description: impl Into<String>,
        clock: &impl Clock,
    ) -> TodoResult<()> {
        let value = description.into();
        rules::validate_description(&value)?;
        self.description = value;
        self.touch(clock);
        Ok(())
    }

    /// Replaces the priority.
    pub fn update_priority(&mut self, priority: TodoPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    /// Returns the time elapsed since creation.
    #[must_use]
    pub fn elapsed_since_creation(&self, clock: &impl Clock) -> Duration {
        clock.utc() - self.created_at
    }

    /// Returns the time elapsed since completion.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::CannotCompleteTodo`] when the todo is not
    /// completed.
    pub fn elapsed_since_completion(&self, clock: &impl Clock) -> TodoResult<Duration> {
        match (self.status, self.completed_at) {
            (TodoStatus::Completed, Some(completed_at)) => Ok(clock.utc() - completed_at),
            _ => Err(DomainError::from(ErrorKind::CannotCompleteTodo)
                .with_detail("reason", "todo is not completed")
                .with_detail("id", self.id.to_string())),
        }
    }

    fn rejected_transition(&self, kind: ErrorKind, target: TodoStatus) -> DomainError {
        DomainError::from(kind)
            .with_detail("id", self.id.to_string())
            .with_detail("from", self.status.as_str())
            .with_detail("to", target.as_str())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
