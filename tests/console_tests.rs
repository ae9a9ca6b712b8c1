//! Console front end tests
mod common;

use common::{console_output, memory_console};
use std::io::Cursor;
use tempfile::NamedTempFile;
use todo_mcp::console::{ConsoleInterface, Flow};
use todo_mcp::{Config, Priority};

#[test]
fn test_add_and_view() {
    let mut console = memory_console();
    console.execute_line("add Buy milk").unwrap();
    console
        .execute_line("add File taxes --priority High")
        .unwrap();
    console.execute_line("view").unwrap();

    let tasks = console.tasks().list();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].priority, Priority::High);

    let output = console_output(console);
    assert!(output.contains("✓ Task added: [1] Buy milk (Priority: Medium)"));
    assert!(output.contains("✓ Task added: [2] File taxes (Priority: High)"));
    assert!(output.contains("ID   Status   Priority   Description"));
    assert!(output.contains("2    ○ TODO   High       File taxes"));
}

#[test]
fn test_view_empty_list() {
    let mut console = memory_console();
    console.execute_line("view").unwrap();
    assert!(console_output(console).contains("No tasks yet. Add one with: add <description>"));
}

#[test]
fn test_validation_errors_are_reported() {
    let mut console = memory_console();
    console.execute_line("add    ").unwrap();
    console.execute_line("add --priority High").unwrap();
    console
        .execute_line("add Something --priority urgent")
        .unwrap();

    assert!(console.tasks().is_empty());
    let output = console_output(console);
    assert!(output.contains("✗ Error: Usage: add <description> [--priority <priority>]"));
    assert!(output.contains("✗ Error: Description cannot be empty or whitespace-only"));
    assert!(output.contains("✗ Error: Invalid priority 'urgent'. Must be High, Medium, or Low"));
}

#[test]
fn test_complete_update_delete() {
    let mut console = memory_console();
    console
        .execute_line("add Write report --priority Low")
        .unwrap();
    console.execute_line("complete 1").unwrap();
    console.execute_line("complete 1").unwrap();
    console
        .execute_line("update 1 --description Write final report --priority High")
        .unwrap();

    let task = console.tasks().get(1).unwrap();
    assert_eq!(task.description, "Write final report");
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);

    console.execute_line("delete 1").unwrap();
    assert!(console.tasks().is_empty());

    let output = console_output(console);
    assert!(output.contains("✓ Task marked as complete: [1] Write report"));
    assert!(output.contains("✓ Task marked as incomplete: [1] Write report"));
    assert!(output.contains("✓ Task updated: [1] Write final report (Priority: High)"));
    assert!(output.contains("✓ Task deleted: [1] Write final report"));
}

#[test]
fn test_bad_ids_and_unknown_commands() {
    let mut console = memory_console();
    console.execute_line("delete one").unwrap();
    console.execute_line("complete 5").unwrap();
    console.execute_line("update 2").unwrap();
    console.execute_line("launch rockets").unwrap();

    let output = console_output(console);
    assert!(output.contains("✗ Error: Task ID must be a number"));
    assert!(output.contains("✗ Error: Task 5 not found"));
    assert!(output.contains("✗ Error: Usage: update <task_id>"));
    assert!(output.contains("✗ Error: Unknown command: launch"));
    assert!(output.contains("Type 'help' for available commands."));
}

#[test]
fn test_exit_and_blank_lines() {
    let mut console = memory_console();
    assert_eq!(console.execute_line("").unwrap(), Flow::Continue);
    assert_eq!(console.execute_line("help").unwrap(), Flow::Continue);
    assert_eq!(console.execute_line("EXIT").unwrap(), Flow::Exit);
    assert!(console_output(console).contains("Goodbye!"));
}

#[test]
fn test_run_reads_until_exit() {
    let mut console = memory_console();
    let input = Cursor::new("add a\nadd b\n\ndelete 1\nexit\nadd never\n");
    console.run(input).unwrap();

    let descriptions: Vec<&str> = console
        .tasks()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["b"]);

    let output = console_output(console);
    assert!(output.contains("Welcome to Todo Console App"));
    assert!(output.contains("todo> "));
    assert!(!output.contains("never"));
}

#[test]
fn test_run_stops_at_end_of_input() {
    let mut console = memory_console();
    console.run(Cursor::new("add a\n")).unwrap();
    assert_eq!(console.tasks().len(), 1);
    assert!(console_output(console).ends_with("Goodbye!\n\n"));
}

#[test]
fn test_run_skips_invalid_utf8_lines() {
    let mut console = memory_console();
    let input: &[u8] = b"add first\n\xff\xfe\nadd second\r\nexit\n";
    console.run(input).unwrap();

    let descriptions: Vec<&str> = console
        .tasks()
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["first", "second"]);

    let output = console_output(console);
    assert!(output.contains("✗ Error: Input is not valid UTF-8"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_console_persists_to_data_file() {
    let temp_file = NamedTempFile::new().unwrap();
    let config = Config {
        prompt: "> ".to_string(),
        ..Config::with_data_file(temp_file.path())
    };

    let mut console = ConsoleInterface::new(&config, Vec::new()).unwrap();
    console
        .run(Cursor::new("add a\nadd b --priority Low\ncomplete 2\ndelete 1\n"))
        .unwrap();

    let reopened = ConsoleInterface::new(&config, Vec::new()).unwrap();
    let tasks = reopened.tasks().list();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 2);
    assert_eq!(tasks[0].priority, Priority::Low);
    assert!(tasks[0].completed);
    assert_eq!(reopened.tasks().next_id(), 3);
}
