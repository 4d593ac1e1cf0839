//! Parsing of CLI input lines into typed commands.

use thiserror::Error;

/// A command entered at the todo prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Create a todo.
    Add {
        /// Title of the new todo.
        title: String,
        /// Description, empty when omitted.
        description: String,
        /// Priority string, if given.
        priority: Option<String>,
    },
    /// List every todo.
    List,
    /// Show one todo.
    Get {
        /// Raw identifier.
        id: String,
    },
    /// Replace fields of a todo.
    Update {
        /// Raw identifier.
        id: String,
        /// Replacement title.
        title: String,
        /// Replacement description, if given.
        description: Option<String>,
        /// Replacement priority, if given.
        priority: Option<String>,
    },
    /// Complete a todo.
    Complete {
        /// Raw identifier.
        id: String,
    },
    /// Archive a todo.
    Archive {
        /// Raw identifier.
        id: String,
    },
    /// Delete a todo.
    Delete {
        /// Raw identifier.
        id: String,
    },
    /// Print the command reference.
    Help,
    /// Leave the prompt.
    Quit,
}

/// Errors raised while parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliParseError {
    /// The line held no command.
    #[error("no command given")]
    Empty,
    /// A command was given the wrong arguments.
    #[error("Usage: {0}")]
    Usage(&'static str),
    /// The command word is not recognized.
    #[error("Unknown command: {0}. Type 'help' for available commands.")]
    Unknown(String),
    /// A quoted argument was not closed.
    #[error("unterminated quote in input")]
    UnterminatedQuote,
}

const ADD_USAGE: &str = "add <title> [description] [priority]";
const GET_USAGE: &str = "get <id>";
const UPDATE_USAGE: &str = "update <id> <title> [description] [priority]";
const COMPLETE_USAGE: &str = "complete <id>";
const ARCHIVE_USAGE: &str = "archive <id>";
const DELETE_USAGE: &str = "delete <id>";

impl CliCommand {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns [`CliParseError`] for blank lines, unknown commands, missing
    /// arguments and unbalanced quotes.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_ddd::todo::adapters::cli::CliCommand;
    ///
    /// let command = CliCommand::parse(r#"add "Buy milk" "2 liters" high"#)?;
    /// assert_eq!(
    ///     command,
    ///     CliCommand::Add {
    ///         title: "Buy milk".to_owned(),
    ///         description: "2 liters".to_owned(),
    ///         priority: Some("high".to_owned()),
    ///     }
    /// );
    /// # Ok::<(), todo_ddd::todo::adapters::cli::CliParseError>(())
    /// ```
    pub fn parse(line: &str) -> Result<Self, CliParseError> {
        let tokens = tokenize(line)?;
        let mut args = tokens.into_iter();
        let Some(verb) = args.next() else {
            return Err(CliParseError::Empty);
        };

        match verb.as_str() {
            "add" => {
                let title = args.next().ok_or(CliParseError::Usage(ADD_USAGE))?;
                Ok(Self::Add {
                    title,
                    description: args.next().unwrap_or_default(),
                    priority: args.next(),
                })
            }
            "list" => Ok(Self::List),
            "get" => single_id(args, GET_USAGE).map(|id| Self::Get { id }),
            "update" => {
                let id = args.next().ok_or(CliParseError::Usage(UPDATE_USAGE))?;
                let title = args.next().ok_or(CliParseError::Usage(UPDATE_USAGE))?;
                Ok(Self::Update {
                    id,
                    title,
                    description: args.next(),
                    priority: args.next(),
                })
            }
            "complete" => single_id(args, COMPLETE_USAGE).map(|id| Self::Complete { id }),
            "archive" => single_id(args, ARCHIVE_USAGE).map(|id| Self::Archive { id }),
            "delete" => single_id(args, DELETE_USAGE).map(|id| Self::Delete { id }),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CliParseError::Unknown(verb)),
        }
    }
}

fn single_id(
    mut args: impl Iterator<Item = String>,
    usage: &'static str,
) -> Result<String, CliParseError> {
    args.next().ok_or(CliParseError::Usage(usage))
}

/// Splits on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, CliParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(CliParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
