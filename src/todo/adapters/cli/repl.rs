//! Prompt loop driving the todo use cases from text input.

use super::{CliCommand, CliParseError};
use crate::todo::{
    domain::{DomainError, ErrorKind, TodoId},
    ports::TodoUseCase,
    services::{CreateTodoRequest, TodoResponse, UpdateTodoRequest},
};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HELP: &str = "\
Available commands:
  add <title> [description] [priority]           - Add a new todo
  list                                           - List all todos
  get <id>                                       - Get todo details
  update <id> <title> [description] [priority]   - Update a todo
  complete <id>                                  - Complete a todo
  archive <id>                                   - Archive a todo
  delete <id>                                    - Delete a todo
  help                                           - Show this help
  quit/exit                                      - Exit the application

Priority options: low, medium, high
Quote arguments that contain spaces.";

/// Interactive todo shell.
#[derive(Clone)]
pub struct TodoCli {
    use_case: Arc<dyn TodoUseCase>,
}

impl TodoCli {
    /// Creates a shell over the given use-case port.
    #[must_use]
    pub fn new(use_case: Arc<dyn TodoUseCase>) -> Self {
        Self { use_case }
    }

    /// Reads commands from `reader` until `quit`, `exit` or end of input,
    /// writing prompts and results to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when reading or writing fails. Use-case failures
    /// are reported to `writer` and do not end the loop.
    pub async fn run<R, W>(&self, mut reader: R, writer: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(writer, "Todo CLI - Type 'help' for commands")?;
        let mut line = String::new();
        loop {
            write!(writer, "> ")?;
            writer.flush()?;
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            match CliCommand::parse(&line) {
                Ok(CliCommand::Quit) => break,
                Ok(command) => self.execute(command, writer).await?,
                Err(CliParseError::Empty) => {}
                Err(err) => writeln!(writer, "{err}")?,
            }
        }
        Ok(())
    }

    /// Runs one parsed command, writing its outcome.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when writing fails.
    pub async fn execute<W: Write>(&self, command: CliCommand, writer: &mut W) -> io::Result<()> {
        match command {
            CliCommand::Add {
                title,
                description,
                priority,
            } => {
                let request = CreateTodoRequest {
                    title,
                    description,
                    priority,
                };
                match self.use_case.create_todo(request).await {
                    Ok(id) => writeln!(writer, "Todo created with ID: {id}"),
                    Err(err) => report(writer, &err),
                }
            }
            CliCommand::List => match self.use_case.list_todos().await {
                Ok(list) if list.count == 0 => writeln!(writer, "No todos found"),
                Ok(list) => {
                    writeln!(writer, "Found {} todos:", list.count)?;
                    for todo in &list.todos {
                        writeln!(
                            writer,
                            "[{}] {} - {} (Priority: {})",
                            todo.id, todo.title, todo.status, todo.priority
                        )?;
                    }
                    Ok(())
                }
                Err(err) => report(writer, &err),
            },
            CliCommand::Get { id } => {
                let outcome = match parse_id(&id) {
                    Ok(todo_id) => self.use_case.get_todo(todo_id).await,
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(todo) => print_details(writer, &todo),
                    Err(err) => report(writer, &err),
                }
            }
            CliCommand::Update {
                id,
                title,
                description,
                priority,
            } => {
                let outcome = match parse_id(&id) {
                    Ok(todo_id) => {
                        let request = UpdateTodoRequest {
                            id: todo_id,
                            title: Some(title),
                            description,
                            priority,
                        };
                        self.use_case.update_todo(request).await
                    }
                    Err(err) => Err(err),
                };
                acknowledge(writer, outcome, "Todo updated successfully")
            }
            CliCommand::Complete { id } => {
                let outcome = match parse_id(&id) {
                    Ok(todo_id) => self.use_case.complete_todo(todo_id).await,
                    Err(err) => Err(err),
                };
                acknowledge(writer, outcome, "Todo completed successfully")
            }
            CliCommand::Archive { id } => {
                let outcome = match parse_id(&id) {
                    Ok(todo_id) => self.use_case.archive_todo(todo_id).await,
                    Err(err) => Err(err),
                };
                acknowledge(writer, outcome, "Todo archived successfully")
            }
            CliCommand::Delete { id } => {
                let outcome = match parse_id(&id) {
                    Ok(todo_id) => self.use_case.delete_todo(todo_id).await,
                    Err(err) => Err(err),
                };
                acknowledge(writer, outcome, "Todo deleted successfully")
            }
            CliCommand::Help => writeln!(writer, "{HELP}"),
            CliCommand::Quit => Ok(()),
        }
    }
}

fn parse_id(raw: &str) -> Result<TodoId, DomainError> {
    TodoId::parse(raw)
        .map_err(|_| DomainError::from(ErrorKind::TodoNotFound).with_detail("id", raw))
}

fn acknowledge<W: Write>(
    writer: &mut W,
    outcome: Result<(), DomainError>,
    success: &str,
) -> io::Result<()> {
    match outcome {
        Ok(()) => writeln!(writer, "{success}"),
        Err(err) => report(writer, &err),
    }
}

fn report<W: Write>(writer: &mut W, err: &DomainError) -> io::Result<()> {
    writeln!(writer, "Error: {}", err.message())
}

fn print_details<W: Write>(writer: &mut W, todo: &TodoResponse) -> io::Result<()> {
    writeln!(writer, "Todo Details:")?;
    writeln!(writer, "  ID: {}", todo.id)?;
    writeln!(writer, "  Title: {}", todo.title)?;
    writeln!(writer, "  Description: {}", todo.description)?;
    writeln!(writer, "  Status: {}", todo.status)?;
    writeln!(writer, "  Priority: {}", todo.priority)?;
    writeln!(
        writer,
        "  Created: {}",
        todo.created_at.format(TIMESTAMP_FORMAT)
    )?;
    if let Some(completed_at) = todo.completed_at {
        writeln!(writer, "  Completed: {}", completed_at.format(TIMESTAMP_FORMAT))?;
    }
    Ok(())
}
