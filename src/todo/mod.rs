//! Todo lifecycle management.
//!
//! Creating, editing, completing, archiving and deleting todos, with every
//! field checked against one rule set and every failure reported as a
//! catalogued [`domain::DomainError`]. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Field validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Orchestration services in [`services`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
