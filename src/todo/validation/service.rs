//! Validation service implementation.

use crate::todo::{
    domain::rules,
    ports::validator::{TodoValidator, ValidationResult},
};

/// Default implementation of the todo validator.
///
/// Stateless: checks fields in a fixed order and fails on the first error.
///
/// # Examples
///
/// ```
/// use todo_ddd::todo::domain::ErrorKind;
/// use todo_ddd::todo::ports::TodoValidator;
/// use todo_ddd::todo::validation::DefaultTodoValidator;
///
/// let validator = DefaultTodoValidator::new();
/// assert!(validator.validate_create("Buy milk", "2 liters", Some("high")).is_ok());
///
/// let error = validator
///     .validate_create("", "", Some("urgent"))
///     .expect_err("blank title fails first");
/// assert!(error.is(ErrorKind::EmptyTitle));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTodoValidator;

impl DefaultTodoValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TodoValidator for DefaultTodoValidator {
    fn validate_title(&self, title: &str) -> ValidationResult {
        rules::validate_title(title)
    }

    fn validate_description(&self, description: &str) -> ValidationResult {
        rules::validate_description(description)
    }

    fn validate_priority(&self, priority: &str) -> ValidationResult {
        rules::validate_priority(priority)
    }

    fn validate_create(
        &self,
        title: &str,
        description: &str,
        priority: Option<&str>,
    ) -> ValidationResult {
        self.validate_title(title)?;
        self.validate_description(description)?;
        if let Some(value) = supplied(priority) {
            self.validate_priority(value)?;
        }
        Ok(())
    }

    fn validate_update(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<&str>,
    ) -> ValidationResult {
        if let Some(value) = supplied(title) {
            self.validate_title(value)?;
        }
        if let Some(value) = supplied(description) {
            self.validate_description(value)?;
        }
        if let Some(value) = supplied(priority) {
            self.validate_priority(value)?;
        }
        Ok(())
    }
}

/// Treats empty strings as absent fields.
pub(crate) fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
