//! Rendering of domain errors as HTTP responses.

use crate::todo::domain::DomainError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Header marking responses that carry a domain error body.
pub const ERROR_TYPE_HEADER: &str = "x-error-type";

/// A domain error on its way out of an HTTP handler.
#[derive(Debug, Clone)]
pub struct HttpError {
    error: DomainError,
    expose_internal: bool,
}

impl HttpError {
    /// Wraps `error`; `expose_internal` controls whether the internal reason
    /// is rendered.
    #[must_use]
    pub const fn new(error: DomainError, expose_internal: bool) -> Self {
        Self {
            error,
            expose_internal,
        }
    }

    /// Returns the wrapped domain error.
    #[must_use]
    pub const fn error(&self) -> &DomainError {
        &self.error
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = if self.expose_internal {
            self.error.to_response()
        } else {
            self.error.to_public_response()
        };
        (status, [(ERROR_TYPE_HEADER, "domain-error")], Json(body)).into_response()
    }
}
