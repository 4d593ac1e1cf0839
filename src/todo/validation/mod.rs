//! Todo field validation.
//!
//! Provides the default implementation of the [`TodoValidator`] port on top
//! of the shared domain field rules.
//!
//! [`TodoValidator`]: crate::todo::ports::TodoValidator

pub mod service;

pub use crate::todo::domain::rules;
pub use service::DefaultTodoValidator;
