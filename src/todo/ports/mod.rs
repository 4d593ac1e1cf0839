//! Port contracts for the todo context.
//!
//! Ports define infrastructure-agnostic interfaces: the outbound repository
//! and validator used by the services, and the inbound use-case port
//! consumed by transport adapters.

pub mod repository;
pub mod use_case;
pub mod validator;

pub use repository::{TodoRepository, TodoRepositoryError, TodoRepositoryResult};
pub use use_case::TodoUseCase;
pub use validator::{TodoValidator, ValidationResult};
