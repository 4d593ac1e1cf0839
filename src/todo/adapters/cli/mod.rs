//! Line-oriented command interface for the todo use cases.
//!
//! Arguments are separated by whitespace; wrap an argument in double quotes
//! to keep spaces inside it.

mod command;
mod repl;

pub use command::{CliCommand, CliParseError};
pub use repl::TodoCli;
