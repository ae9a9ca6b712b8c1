//! Console command parsing
//!
//! Turns one input line into a `Command`. Task commands become `Operation`s,
//! so the console and the MCP server share the same dispatch.

use crate::operation::Operation;
use crate::todo::TaskId;
use thiserror::Error;

pub const ADD_USAGE: &str = "Usage: add <description> [--priority <priority>]";
pub const DELETE_USAGE: &str = "Usage: delete <task_id>";
pub const UPDATE_USAGE: &str =
    "Usage: update <task_id> [--description <desc>] [--priority <priority>]";
pub const COMPLETE_USAGE: &str = "Usage: complete <task_id>";

const PRIORITY_FLAG: &str = "--priority";
const DESCRIPTION_FLAG: &str = "--description";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Task operation (add, delete, update, complete, view)
    Task(Operation),
    Help,
    Exit,
    /// Blank input line
    Empty,
}

/// Input that could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),
    #[error("Task ID must be a number")]
    InvalidTaskId,
    #[error("Unknown command: {0}")]
    Unknown(String),
}

/// Parse a single input line
///
/// The command word is case-insensitive; everything after it is taken as-is.
///
/// # Examples
/// ```
/// # use todo_mcp::console::{Command, parse_command};
/// # use todo_mcp::Operation;
/// assert_eq!(
///     parse_command("add Buy milk --priority High").unwrap(),
///     Command::Task(Operation::AddTask {
///         description: "Buy milk".to_string(),
///         priority: Some("High".to_string()),
///     })
/// );
/// ```
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "add" => parse_add(rest),
        "delete" => {
            let task_id = parse_id_argument(rest, DELETE_USAGE)?;
            Ok(Command::Task(Operation::DeleteTask { task_id }))
        }
        "complete" => {
            let task_id = parse_id_argument(rest, COMPLETE_USAGE)?;
            Ok(Command::Task(Operation::CompleteTask { task_id }))
        }
        "update" => parse_update(rest),
        "view" => Ok(Command::Task(Operation::ListTasks)),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// `add <description> [--priority <priority>]`
///
/// The description is validated by the task list, so `add --priority High`
/// gets through here and is rejected there with the usual message.
fn parse_add(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(ADD_USAGE));
    }

    let (description, priority) = match rest.split_once(PRIORITY_FLAG) {
        Some((description, priority)) => (description.trim(), non_empty(priority)),
        None => (rest, None),
    };

    Ok(Command::Task(Operation::AddTask {
        description: description.to_string(),
        priority,
    }))
}

/// `update <task_id> [--description <desc>] [--priority <priority>]`
///
/// `--priority` may follow `--description`; text after `--description` up to
/// `--priority` is the new description. `--priority` before `--description`
/// is a usage error.
fn parse_update(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(UPDATE_USAGE));
    }

    let (id_text, flags) = match rest.split_once(char::is_whitespace) {
        Some((id_text, flags)) => (id_text, flags.trim()),
        None => (rest, ""),
    };
    let task_id = parse_task_id(id_text)?;

    if let (Some(priority_at), Some(description_at)) =
        (flags.find(PRIORITY_FLAG), flags.find(DESCRIPTION_FLAG))
        && priority_at < description_at
    {
        return Err(CommandError::Usage(UPDATE_USAGE));
    }

    let (description, priority) = match flags.split_once(DESCRIPTION_FLAG) {
        Some((_, after)) => match after.split_once(PRIORITY_FLAG) {
            Some((description, priority)) => {
                (Some(description.trim().to_string()), non_empty(priority))
            }
            None => (Some(after.trim().to_string()), None),
        },
        None => match flags.split_once(PRIORITY_FLAG) {
            Some((_, priority)) => (None, non_empty(priority)),
            None => (None, None),
        },
    };

    if description.is_none() && priority.is_none() {
        return Err(CommandError::Usage(UPDATE_USAGE));
    }

    Ok(Command::Task(Operation::UpdateTask {
        task_id,
        description,
        priority,
    }))
}

fn parse_id_argument(rest: &str, usage: &'static str) -> Result<TaskId, CommandError> {
    match rest.split_whitespace().next() {
        Some(id_text) => parse_task_id(id_text),
        None => Err(CommandError::Usage(usage)),
    }
}

fn parse_task_id(text: &str) -> Result<TaskId, CommandError> {
    text.parse().map_err(|_| CommandError::InvalidTaskId)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
