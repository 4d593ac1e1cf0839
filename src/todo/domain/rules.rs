//! Field rules shared by the aggregate and the validation service.
//!
//! Lengths are counted in Unicode scalar values.

use super::{DomainError, ErrorKind, TodoPriority};

/// Maximum title length in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;

/// Validates a todo title.
///
/// # Errors
///
/// Returns [`ErrorKind::EmptyTitle`] when the title is blank after trimming
/// and [`ErrorKind::TitleTooLong`] when it exceeds [`MAX_TITLE_LENGTH`].
pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(ErrorKind::EmptyTitle.into());
    }
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(
            DomainError::from(ErrorKind::TitleTooLong).with_detail("length", length.to_string())
        );
    }
    Ok(())
}

/// Validates a todo description. Empty descriptions are allowed.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidDescription`] when the description exceeds
/// [`MAX_DESCRIPTION_LENGTH`].
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(
            DomainError::from(ErrorKind::InvalidDescription).with_detail("length", length.to_string())
        );
    }
    Ok(())
}

/// Validates a priority string.
///
/// Matching is case-sensitive.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidPriority`] unless the value is exactly `low`,
/// `medium` or `high`.
pub fn validate_priority(priority: &str) -> Result<(), DomainError> {
    parse_priority(priority).map(|_| ())
}

/// Parses a priority string into [`TodoPriority`].
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidPriority`] for unrecognized values.
pub fn parse_priority(priority: &str) -> Result<TodoPriority, DomainError> {
    TodoPriority::try_from(priority).map_err(|err| {
        DomainError::from(ErrorKind::InvalidPriority).with_detail("priority", err.0)
    })
}
