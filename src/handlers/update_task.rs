//! Update task handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use crate::operation::Operation;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Changes description and/or priority. Omitted fields keep their value;
    /// if any given field is invalid, nothing is changed.
    pub async fn handle_update_task(
        &self,
        task_id: String,
        description: Option<String>,
        priority: Option<String>,
    ) -> McpResult<String> {
        let task_id = validation::parse_task_id(&task_id)?;

        if description.is_none() && priority.is_none() {
            bail_public!(
                _,
                "Nothing to update for task {}. Provide description and/or priority.",
                task_id
            );
        }

        let outcome = self.run_mutation(Operation::UpdateTask {
            task_id,
            description,
            priority,
        })?;
        Ok(formatting::describe_outcome(&outcome))
    }
}
