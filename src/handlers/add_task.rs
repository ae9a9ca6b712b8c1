//! Add task handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use crate::operation::{Operation, Outcome};
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Creates a task. The id is assigned by the list and returned in the response
    /// so the agent can refer to the task in later calls.
    pub async fn handle_add_task(
        &self,
        description: String,
        priority: Option<String>,
    ) -> McpResult<String> {
        let outcome = self.run_mutation(Operation::AddTask {
            description,
            priority,
        })?;

        Ok(match outcome {
            Outcome::Added(task) => format!(
                "Task created with ID: {} (priority: {})\n{}",
                task.id,
                task.priority,
                task.description
            ),
            other => formatting::describe_outcome(&other),
        })
    }
}
