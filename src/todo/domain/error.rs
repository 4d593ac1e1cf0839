//! Domain error catalogue for the todo context.
//!
//! Every failure that crosses the use-case boundary is a [`DomainError`]. The
//! known failures live in an immutable table keyed by [`ErrorKind`]; each
//! entry carries a numeric code whose range identifies its
//! [`ErrorCategory`], the HTTP status transport adapters should answer with,
//! a public message, an internal reason, and optional structured details.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Result type for operations that fail with a [`DomainError`].
pub type TodoResult<T> = Result<T, DomainError>;

/// Failure category, derived from the numeric error code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Field values rejected by validation (1000-1999).
    Validation,
    /// Referenced todo does not exist (2000-2999).
    NotFound,
    /// State transition not legal from the current state (3000-3999).
    Operation,
    /// Persistence failed or is unavailable (4000-4999).
    Repository,
    /// Malformed input at the transport boundary (5000-5999).
    Transport,
    /// Fixed sentinel used to exercise error paths (9000-9999).
    Diagnostic,
}

impl ErrorCategory {
    /// Resolves the category owning `code`, if any.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            1000..=1999 => Some(Self::Validation),
            2000..=2999 => Some(Self::NotFound),
            3000..=3999 => Some(Self::Operation),
            4000..=4999 => Some(Self::Repository),
            5000..=5999 => Some(Self::Transport),
            9000..=9999 => Some(Self::Diagnostic),
            _ => None,
        }
    }

    /// Returns the canonical category name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::Operation => "operation",
            Self::Repository => "repository",
            Self::Transport => "transport",
            Self::Diagnostic => "diagnostic",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a catalogued failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// Numeric error code.
    pub code: u16,
    /// HTTP status transport adapters answer with.
    pub http_status: u16,
    /// Message safe to show to any caller.
    pub message: &'static str,
    /// Reason intended for operators.
    pub internal_reason: &'static str,
    /// Structured details attached to every instance.
    pub details: &'static [(&'static str, &'static str)],
}

/// Stable symbolic key for each catalogued failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic title failure. Kept for wire compatibility; title checks
    /// report [`Self::EmptyTitle`] or [`Self::TitleTooLong`] instead.
    InvalidTitle,
    /// Description exceeds its limit.
    InvalidDescription,
    /// Priority is not one of `low`, `medium` or `high`.
    InvalidPriority,
    /// Title is blank after trimming.
    EmptyTitle,
    /// Title exceeds its limit.
    TitleTooLong,
    /// No todo exists with the requested identifier.
    TodoNotFound,
    /// The todo cannot move to `completed`.
    CannotCompleteTodo,
    /// The todo cannot move to `archived`.
    CannotArchiveTodo,
    /// The todo cannot move back to `pending`.
    CannotReopenTodo,
    /// The repository is not available.
    RepositoryNotInitialized,
    /// Persisting a todo failed.
    FailedToSaveTodo,
    /// Persisting a freshly completed todo failed.
    FailedToSaveCompletedTodo,
    /// Persisting a freshly archived todo failed.
    FailedToSaveArchivedTodo,
    /// Reading todos from the repository failed.
    FailedToRetrieveTodos,
    /// Deleting a todo failed.
    FailedToDeleteTodo,
    /// A request payload could not be parsed.
    InvalidJson,
    /// Diagnostic sentinel.
    TestError,
}

impl ErrorKind {
    /// Every catalogued kind, in code order.
    pub const ALL: [Self; 17] = [
        Self::InvalidTitle,
        Self::InvalidDescription,
        Self::InvalidPriority,
        Self::EmptyTitle,
        Self::TitleTooLong,
        Self::TodoNotFound,
        Self::CannotCompleteTodo,
        Self::CannotArchiveTodo,
        Self::CannotReopenTodo,
        Self::RepositoryNotInitialized,
        Self::FailedToSaveTodo,
        Self::FailedToSaveCompletedTodo,
        Self::FailedToSaveArchivedTodo,
        Self::FailedToRetrieveTodos,
        Self::FailedToDeleteTodo,
        Self::InvalidJson,
        Self::TestError,
    ];

    /// Returns the catalogue entry for this kind.
    #[must_use]
    pub const fn descriptor(self) -> ErrorDescriptor {
        match self {
            Self::InvalidTitle => entry(1001, 400, "Invalid title", "Title validation failed", &[]),
            Self::InvalidDescription => entry(
                1002,
                400,
                "Invalid description",
                "Description exceeds maximum length of 1000 characters",
                &[("max_length", "1000")],
            ),
            Self::InvalidPriority => entry(
                1003,
                400,
                "Invalid priority",
                "Priority must be low, medium, or high",
                &[],
            ),
            Self::EmptyTitle => entry(1004, 400, "Title cannot be empty", "Empty title provided", &[]),
            Self::TitleTooLong => entry(
                1005,
                400,
                "Title too long",
                "Title exceeds maximum length of 100 characters",
                &[("max_length", "100")],
            ),
            Self::TodoNotFound => entry(
                2001,
                404,
                "Todo not found",
                "Todo with specified ID not found",
                &[],
            ),
            Self::CannotCompleteTodo => entry(
                3001,
                400,
                "Cannot complete todo",
                "Todo cannot be completed",
                &[],
            ),
            Self::CannotArchiveTodo => entry(
                3002,
                400,
                "Cannot archive todo",
                "Todo cannot be archived",
                &[],
            ),
            Self::CannotReopenTodo => entry(
                3003,
                400,
                "Cannot reopen todo",
                "Todo cannot be marked as pending",
                &[],
            ),
            Self::RepositoryNotInitialized => entry(
                4001,
                500,
                "Repository not initialized",
                "Repository is unavailable",
                &[("operation", "list_todos")],
            ),
            Self::FailedToSaveTodo => entry(
                4002,
                500,
                "Failed to save todo",
                "Database save operation failed",
                &[],
            ),
            Self::FailedToSaveCompletedTodo => entry(
                4003,
                500,
                "Failed to save completed todo",
                "Database save operation failed for completed todo",
                &[],
            ),
            Self::FailedToSaveArchivedTodo => entry(
                4004,
                500,
                "Failed to save archived todo",
                "Database save operation failed for archived todo",
                &[],
            ),
            Self::FailedToRetrieveTodos => entry(
                4005,
                500,
                "Failed to retrieve todos",
                "Database retrieve operation failed",
                &[("operation", "list_todos")],
            ),
            Self::FailedToDeleteTodo => entry(
                4006,
                500,
                "Failed to delete todo",
                "Database delete operation failed",
                &[],
            ),
            Self::InvalidJson => entry(5001, 400, "Invalid JSON", "JSON parsing failed", &[]),
            Self::TestError => entry(
                9001,
                400,
                "Test error message",
                "This is a test error for testing error handling",
                &[("test", "true")],
            ),
        }
    }

    /// Returns the numeric code of this kind.
    #[must_use]
    pub const fn code(self) -> u16 {
        self.descriptor().code
    }

    /// Returns the category of this kind.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        match ErrorCategory::from_code(self.code()) {
            Some(category) => category,
            None => ErrorCategory::Diagnostic,
        }
    }
}

const fn entry(
    code: u16,
    http_status: u16,
    message: &'static str,
    internal_reason: &'static str,
    details: &'static [(&'static str, &'static str)],
) -> ErrorDescriptor {
    ErrorDescriptor {
        code,
        http_status,
        message,
        internal_reason,
        details,
    }
}

/// Structured, categorized failure returned across the use-case boundary.
///
/// Instances are immutable values. Catalogued instances are built with
/// `DomainError::from(kind)`; [`DomainError::new`] and the generic helpers
/// cover ad hoc failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    kind: Option<ErrorKind>,
    code: u16,
    http_status: u16,
    message: Cow<'static, str>,
    internal_reason: Cow<'static, str>,
    details: Option<BTreeMap<String, String>>,
}

impl DomainError {
    /// Creates an ad hoc domain error outside the catalogue.
    #[must_use]
    pub fn new(
        code: u16,
        http_status: u16,
        message: impl Into<String>,
        internal_reason: impl Into<String>,
        details: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self {
            kind: None,
            code,
            http_status,
            message: Cow::Owned(message.into()),
            internal_reason: Cow::Owned(internal_reason.into()),
            details,
        }
    }

    /// Creates a generic internal failure.
    #[must_use]
    pub fn common(message: impl Into<String>, internal_reason: impl Into<String>) -> Self {
        Self::new(500, 500, message, internal_reason, None)
    }

    /// Creates a generic validation failure.
    #[must_use]
    pub fn validation(
        message: impl Into<String>,
        details: Option<BTreeMap<String, String>>,
    ) -> Self {
        Self::new(400, 400, message, "Validation failed", details)
    }

    /// Creates a generic not-found failure for `resource` with identifier `id`.
    #[must_use]
    pub fn not_found(resource: &str, id: &str) -> Self {
        let details = BTreeMap::from([
            ("resource".to_owned(), resource.to_owned()),
            ("id".to_owned(), id.to_owned()),
        ]);
        Self::new(
            404,
            404,
            format!("{resource} not found"),
            format!("{resource} with id {id} not found"),
            Some(details),
        )
    }

    /// Returns a copy with `key` set to `value` in the details map.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns the catalogue key, when this error came from the catalogue.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        self.kind
    }

    /// Returns `true` when this error is the catalogued `kind`.
    #[must_use]
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == Some(kind)
    }

    /// Returns the numeric error code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Returns the category of the error code, if it falls in a known range.
    #[must_use]
    pub const fn category(&self) -> Option<ErrorCategory> {
        ErrorCategory::from_code(self.code)
    }

    /// Returns the HTTP status transport adapters should answer with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Returns the public message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the operator-facing reason.
    #[must_use]
    pub fn internal_reason(&self) -> &str {
        &self.internal_reason
    }

    /// Returns the structured details, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&BTreeMap<String, String>> {
        self.details.as_ref()
    }

    /// Projects the error into its wire representation, internal reason
    /// included.
    #[must_use]
    pub fn to_response(&self) -> DomainErrorResponse {
        DomainErrorResponse {
            internal_reason: Some(self.internal_reason.to_string()),
            ..self.to_public_response()
        }
    }

    /// Projects the error into its wire representation for untrusted
    /// callers.
    #[must_use]
    pub fn to_public_response(&self) -> DomainErrorResponse {
        DomainErrorResponse {
            error_code: self.code,
            http_status: self.http_status,
            error_message: self.message.to_string(),
            internal_reason: None,
            details: self.details.clone(),
        }
    }
}

impl From<ErrorKind> for DomainError {
    fn from(kind: ErrorKind) -> Self {
        let descriptor = kind.descriptor();
        let details = (!descriptor.details.is_empty()).then(|| {
            descriptor
                .details
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect()
        });
        Self {
            kind: Some(kind),
            code: descriptor.code,
            http_status: descriptor.http_status,
            message: Cow::Borrowed(descriptor.message),
            internal_reason: Cow::Borrowed(descriptor.internal_reason),
            details,
        }
    }
}

/// Wire representation of a [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DomainErrorResponse {
    /// Numeric error code.
    pub error_code: u16,
    /// HTTP status of the response.
    pub http_status: u16,
    /// Public message.
    pub error_message: String,
    /// Operator-facing reason, omitted for untrusted callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_reason: Option<String>,
    /// Structured details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<BTreeMap<String, String>>,
}
