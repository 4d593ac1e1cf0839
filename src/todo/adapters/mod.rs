//! Adapter implementations for the todo context.

pub mod cli;
pub mod http;
pub mod memory;
pub mod postgres;
