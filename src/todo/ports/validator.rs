//! Validator port for todo field values.

use crate::todo::domain::DomainError;

/// Result type for validation operations.
pub type ValidationResult = Result<(), DomainError>;

/// Port for stateless todo field validation.
///
/// Composite checks run title, then description, then priority, and stop at
/// the first failure.
pub trait TodoValidator: Send + Sync {
    /// Validates a title.
    ///
    /// # Errors
    ///
    /// Returns a validation [`DomainError`] when the title is blank or too
    /// long.
    fn validate_title(&self, title: &str) -> ValidationResult;

    /// Validates a description.
    ///
    /// # Errors
    ///
    /// Returns a validation [`DomainError`] when the description is too long.
    fn validate_description(&self, description: &str) -> ValidationResult;

    /// Validates a priority string.
    ///
    /// # Errors
    ///
    /// Returns a validation [`DomainError`] unless the value is `low`,
    /// `medium` or `high`.
    fn validate_priority(&self, priority: &str) -> ValidationResult;

    /// Validates the fields of a new todo.
    ///
    /// Title and description are always checked; the priority only when one
    /// is supplied.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's [`DomainError`].
    fn validate_create(
        &self,
        title: &str,
        description: &str,
        priority: Option<&str>,
    ) -> ValidationResult;

    /// Validates a partial update.
    ///
    /// Absent or empty fields are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's [`DomainError`].
    fn validate_update(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
    ) -> ValidationResult;
}
