//! HTTP transport adapter for the todo use cases.
//!
//! | Method | Path | Use case |
//! |--------|------|----------|
//! | POST | `/todos` | create |
//! | GET | `/todos` | list |
//! | GET | `/todos/{id}` | get |
//! | PUT | `/todos/{id}` | update |
//! | PUT | `/todos/{id}/complete` | complete |
//! | PUT | `/todos/{id}/archive` | archive |
//! | DELETE | `/todos/{id}` | delete |
//! | GET | `/test-error` | diagnostic sentinel |
//! | GET | `/health` | liveness |
//!
//! Payloads use kebab-case field names. Failures are rendered as
//! [`DomainErrorResponse`](crate::todo::domain::DomainErrorResponse) bodies
//! with the error's HTTP status.

mod error;
pub mod handlers;
pub mod payloads;
mod routes;
mod state;

pub use error::{ERROR_TYPE_HEADER, HttpError};
pub use routes::create_router;
pub use state::AppState;
