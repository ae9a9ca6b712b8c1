//! MCP tool handlers for the todo server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file; the shared write path lives here.

pub mod add_task;
pub mod complete_task;
pub mod delete_task;
pub mod list_tasks;
pub mod update_task;

use crate::TodoServerHandler;
use crate::operation::{Operation, Outcome};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::{error, info, warn};

impl TodoServerHandler {
    /// Applies a mutating operation under the write lock and persists the result.
    ///
    /// The snapshot is written before the lock is released, so the file always
    /// reflects mutations in the order they were applied. If the save fails the
    /// list is restored, so an error always means nothing changed.
    pub(crate) fn run_mutation(&self, operation: Operation) -> McpResult<Outcome> {
        let tool = operation.name();
        let mut data = self.write_tasks();
        let before = self.storage.as_ref().map(|_| data.clone());

        let outcome = match operation.apply(&mut data) {
            Ok(outcome) => outcome,
            Err(e) => {
                drop(data);
                warn!(tool, error = %e, "tool call rejected");
                return Err(validation::task_error_to_mcp(e));
            }
        };

        if let Some(storage) = &self.storage
            && let Err(e) = storage.save(&data)
        {
            if let Some(before) = before {
                *data = before;
            }
            drop(data);
            error!(tool, error = %e, "failed to save task list");
            bail_public!(_, "Failed to save: {}", e);
        }
        drop(data);

        info!(tool, "tool call applied");
        Ok(outcome)
    }
}
