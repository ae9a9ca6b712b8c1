//! Delete task handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use crate::operation::{Operation, Outcome};
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Deletes a task permanently. Its id is never handed out again.
    pub async fn handle_delete_task(&self, task_id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&task_id)?;
        let outcome = self.run_mutation(Operation::DeleteTask { task_id })?;

        Ok(match outcome {
            Outcome::Deleted(task) => format!(
                "Task {} deleted successfully: {}",
                task.id, task.description
            ),
            other => formatting::describe_outcome(&other),
        })
    }
}
