//! Unit tests for the todo module.
//!
//! Tests are grouped by concern: the aggregate, its lifecycle transitions,
//! field validation, the error catalogue and service orchestration.

mod clock;
