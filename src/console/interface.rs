use crate::config::Config;
use crate::console::command::{Command, CommandError, parse_command};
use crate::formatting;
use crate::operation::Outcome;
use crate::storage::Storage;
use crate::todo::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

const BANNER_WIDTH: usize = 60;

/// Whether the read loop should keep going after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive console over a single task list
///
/// Output goes to any `Write`, which keeps the loop testable with an
/// in-memory buffer.
pub struct ConsoleInterface<W: Write> {
    tasks: TaskList,
    storage: Option<Storage>,
    prompt: String,
    out: W,
}

impl<W: Write> ConsoleInterface<W> {
    /// Create a console, loading the task list from the configured data file
    pub fn new(config: &Config, out: W) -> Result<Self> {
        let storage = config.data_file.as_ref().map(Storage::new);
        let tasks = match &storage {
            Some(storage) => storage.load()?,
            None => TaskList::new(),
        };
        Ok(Self {
            tasks,
            storage,
            prompt: config.prompt.clone(),
            out,
        })
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Consume the console and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the read loop until `exit` or end of input
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.display_welcome()?;

        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.out, "\n\nGoodbye!\n")?;
                break;
            }

            // A bad line is reported and skipped; the session keeps going
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim_end_matches(['\n', '\r']),
                Err(e) => {
                    warn!(error = %e, "skipping input line");
                    self.display_error("Input is not valid UTF-8")?;
                    continue;
                }
            };

            if self.execute_line(line)? == Flow::Exit {
                break;
            }
        }

        Ok(())
    }

    /// Parse and execute one line of input
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                self.display_error(&e.to_string())?;
                if matches!(e, CommandError::Unknown(_)) {
                    writeln!(self.out, "Type 'help' for available commands.\n")?;
                }
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Empty => {}
            Command::Help => self.display_welcome()?,
            Command::Exit => {
                writeln!(self.out, "\nGoodbye!\n")?;
                return Ok(Flow::Exit);
            }
            Command::Task(operation) => {
                let read_only = operation.is_read_only();
                debug!(command = operation.name(), "console command");
                match operation.apply(&mut self.tasks) {
                    Ok(outcome) => {
                        if !read_only {
                            self.persist()?;
                        }
                        self.display_outcome(&outcome)?;
                    }
                    Err(e) => self.display_error(&e.to_string())?,
                }
            }
        }

        Ok(Flow::Continue)
    }

    fn persist(&mut self) -> Result<()> {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.save(&self.tasks)
        {
            error!(error = %e, "failed to save task list");
            self.display_error(&format!("Failed to save: {}", e))?;
        }
        Ok(())
    }

    fn display_outcome(&mut self, outcome: &Outcome) -> Result<()> {
        match outcome {
            Outcome::Listed(tasks) if tasks.is_empty() => self.display_empty_message(),
            Outcome::Listed(tasks) => {
                writeln!(self.out, "{}", formatting::format_task_table(tasks))?;
                Ok(())
            }
            other => self.display_confirmation(&formatting::describe_outcome(other)),
        }
    }

    fn display_welcome(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.out, "\n{}", rule)?;
        writeln!(
            self.out,
            "{:^width$}",
            "Welcome to Todo Console App",
            width = BANNER_WIDTH
        )?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "\nAvailable Commands:")?;
        for (usage, help) in [
            (
                "add <description> [--priority <priority>]",
                "Add a new task (priority: High, Medium, Low)",
            ),
            ("delete <task_id>", "Delete a task by ID"),
            (
                "update <task_id> [--description <desc>] [--priority <priority>]",
                "Update a task's description and/or priority",
            ),
            ("view", "Display all tasks"),
            ("complete <task_id>", "Toggle task completion status"),
            ("help", "Show this help message"),
            ("exit", "Exit the application"),
        ] {
            writeln!(self.out, "  {}\n      {}", usage, help)?;
        }
        writeln!(self.out, "{}\n", rule)?;
        Ok(())
    }

    fn display_empty_message(&mut self) -> Result<()> {
        writeln!(self.out, "\n📭 No tasks yet. Add one with: add <description>\n")?;
        Ok(())
    }

    fn display_confirmation(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n✓ {}\n", message)?;
        Ok(())
    }

    fn display_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "\n✗ Error: {}\n", message)?;
        Ok(())
    }
}
