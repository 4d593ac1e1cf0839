//! Shared state handed to every HTTP handler.

use super::HttpError;
use crate::todo::{domain::DomainError, ports::TodoUseCase};
use std::sync::Arc;

/// Router state: the use-case port plus presentation settings.
#[derive(Clone)]
pub struct AppState {
    use_case: Arc<dyn TodoUseCase>,
    expose_internal_errors: bool,
}

impl AppState {
    /// Creates state that hides internal error reasons.
    #[must_use]
    pub fn new(use_case: Arc<dyn TodoUseCase>) -> Self {
        Self {
            use_case,
            expose_internal_errors: false,
        }
    }

    /// Sets whether error bodies carry the internal reason.
    #[must_use]
    pub const fn with_internal_errors(mut self, expose: bool) -> Self {
        self.expose_internal_errors = expose;
        self
    }

    /// Returns the use-case port.
    #[must_use]
    pub fn use_case(&self) -> &dyn TodoUseCase {
        self.use_case.as_ref()
    }

    /// Wraps a domain error for rendering under this state's settings.
    #[must_use]
    pub const fn reject(&self, error: DomainError) -> HttpError {
        HttpError::new(error, self.expose_internal_errors)
    }
}
