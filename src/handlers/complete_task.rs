//! Complete task handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use crate::operation::Operation;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Toggles completion. Calling it on a completed task marks it incomplete again.
    pub async fn handle_complete_task(&self, task_id: String) -> McpResult<String> {
        let task_id = validation::parse_task_id(&task_id)?;
        let outcome = self.run_mutation(Operation::CompleteTask { task_id })?;
        Ok(formatting::describe_outcome(&outcome))
    }
}
