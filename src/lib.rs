//! Todo management built around a domain-driven core.
//!
//! The crate models a todo as an aggregate with a small lifecycle
//! (pending, completed, archived), validates its fields against one shared
//! rule set, and exposes every operation through a use-case port that
//! transport adapters drive.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the aggregate, its rules and the error catalogue
//! - **Ports**: repository, validator and use-case traits
//! - **Adapters**: in-memory and `PostgreSQL` storage, HTTP and CLI transport
//!
//! # Modules
//!
//! - [`todo`]: the todo bounded context
//! - [`config`]: environment-driven configuration
//! - [`telemetry`]: tracing subscriber set-up

pub mod config;
pub mod telemetry;
pub mod todo;
