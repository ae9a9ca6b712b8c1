//! Validation helper functions for the MCP server
//!
//! Parses tool parameters and turns collection errors into MCP errors.

use crate::error::TaskError;
use crate::todo::TaskId;
use mcp_attr::Result as McpResult;

/// Parse a task ID parameter
///
/// # Arguments
/// * `task_id` - Task ID as sent by the client (e.g., "3", " 12 ")
///
/// # Returns
/// Result containing the numeric id or an invalid-params error
pub fn parse_task_id(task_id: &str) -> McpResult<TaskId> {
    task_id.trim().parse::<TaskId>().map_err(|_| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(
            format!(
                "Invalid task ID format: {}. Task IDs are positive integers (e.g., '3'). Use list_tasks() to see available tasks.",
                task_id
            ),
            true,
        )
    })
}

/// Convert a collection error into an MCP error visible to the client
pub fn task_error_to_mcp(err: TaskError) -> mcp_attr::Error {
    let message = match &err {
        TaskError::Validation(_) => err.to_string(),
        TaskError::NotFound(_) => {
            format!("{}. Use list_tasks() to see available tasks.", err)
        }
    };
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id("3").unwrap(), 3);
        assert_eq!(parse_task_id(" 42 ").unwrap(), 42);
        assert!(parse_task_id("abc").is_err());
        assert!(parse_task_id("-1").is_err());
        assert!(parse_task_id("").is_err());
    }
}
