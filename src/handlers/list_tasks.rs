//! List handler for the todo server

use crate::TodoServerHandler;
use crate::formatting;
use crate::operation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Lists every task in creation order. Only takes the read lock.
    pub async fn handle_list_tasks(&self) -> McpResult<String> {
        let data = self.read_tasks();
        let tasks = operation::list_snapshot(&data);
        drop(data);

        Ok(formatting::format_tasks(&tasks))
    }
}
