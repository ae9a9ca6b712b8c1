//! Common test utilities for integration tests
#![allow(dead_code)]

use tempfile::NamedTempFile;
use todo_mcp::console::ConsoleInterface;
use todo_mcp::{Config, TaskId, TodoServerHandler};

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::new(&Config::with_data_file(temp_file.path())).unwrap();
    (handler, temp_file)
}

/// Extract task ID from add_task() response message
/// Response format: "Task created with ID: <id> (priority: ...)"
pub fn extract_id_from_response(response: &str) -> TaskId {
    let start = response.find("ID: ").expect("response has no ID") + 4;
    let id_part = &response[start..];
    let end = id_part.find(' ').unwrap_or(id_part.len());
    id_part[..end].trim().parse().unwrap()
}

/// Console writing into a buffer, tasks kept in memory
pub fn memory_console() -> ConsoleInterface<Vec<u8>> {
    ConsoleInterface::new(&Config::default(), Vec::new()).unwrap()
}

/// Everything the console has written so far
pub fn console_output(console: ConsoleInterface<Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}
