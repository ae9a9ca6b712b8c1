//! Todo MCP Library
//!
//! This library provides an ordered, ID-indexed todo list together with two
//! front ends: an interactive console and a Model Context Protocol (MCP)
//! server that lets an AI agent manage the list through tools.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Front-end Layer**: `TodoServerHandler` (MCP tools) and `console` (REPL)
//! - **Domain Layer**: `todo` module (`TaskList`, `Task`) and `operation`
//!   (the closed set of task operations both front ends dispatch through)
//! - **Persistence Layer**: `storage` module - optional TOML snapshot file
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::with_data_file("tasks.toml");
//!     let handler = TodoServerHandler::new(&config)?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod operation;
pub mod storage;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

// Re-export commonly used types
pub use config::Config;
pub use error::{TaskError, ValidationError};
pub use operation::{Operation, OperationError, Outcome};
pub use storage::Storage;
pub use todo::{Priority, Task, TaskId, TaskList};

/// MCP Server handler for one owner's task list
///
/// The list sits behind a read/write lock: listings share the read lock,
/// every mutating tool takes the write lock. When a data file is configured,
/// each successful mutation is written to it before the write lock is released.
pub struct TodoServerHandler {
    pub(crate) data: RwLock<TaskList>,
    pub(crate) storage: Option<Storage>,
}

impl TodoServerHandler {
    /// Create a new handler
    ///
    /// # Arguments
    /// * `config` - Application configuration; `data_file` selects the snapshot file
    ///
    /// # Returns
    /// Result containing the handler or an error if the snapshot cannot be loaded
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::{Config, TodoServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::new(&Config::with_data_file("tasks.toml"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: &Config) -> Result<Self> {
        let storage = config.data_file.as_ref().map(Storage::new);
        let data = match &storage {
            Some(storage) => storage.load()?,
            None => TaskList::new(),
        };
        info!(
            tasks = data.len(),
            persistent = storage.is_some(),
            "task list ready"
        );
        Ok(Self {
            data: RwLock::new(data),
            storage,
        })
    }

    /// Handler whose tasks live in memory only
    pub fn in_memory() -> Self {
        Self {
            data: RwLock::new(TaskList::new()),
            storage: None,
        }
    }

    pub fn storage(&self) -> Option<&Storage> {
        self.storage.as_ref()
    }

    /// Owned copy of all tasks in insertion order
    pub fn tasks(&self) -> Vec<Task> {
        operation::list_snapshot(&self.read_tasks())
    }

    // A panic while holding the lock cannot leave a half-applied change,
    // since every TaskList operation validates before it mutates.
    pub(crate) fn read_tasks(&self) -> RwLockReadGuard<'_, TaskList> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_tasks(&self) -> RwLockWriteGuard<'_, TaskList> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Todo list manager for a single user.
///
/// Tasks have a numeric ID (assigned on creation, never reused), a description,
/// a priority (High, Medium or Low; Medium by default) and a completion flag.
/// Tasks are always listed in the order they were created.
///
/// Key tools:
/// - **add_task**: create a task
/// - **list_tasks**: show every task with its ID (use this to find IDs)
/// - **complete_task**: toggle a task between complete and incomplete
/// - **update_task**: change description and/or priority
/// - **delete_task**: remove a task permanently
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// Add a new task to the user's task list.
    #[tool]
    async fn add_task(
        &self,
        /// The task description
        description: String,
        /// Task priority: High/Medium/Low (optional, defaults to Medium)
        priority: Option<String>,
    ) -> McpResult<String> {
        self.handle_add_task(description, priority).await
    }

    /// List all tasks for the user in creation order.
    #[tool]
    async fn list_tasks(&self) -> McpResult<String> {
        self.handle_list_tasks().await
    }

    /// Mark a task as complete, or back to incomplete if it is already complete.
    #[tool]
    async fn complete_task(
        &self,
        /// The ID of the task to toggle (e.g., "3")
        task_id: String,
    ) -> McpResult<String> {
        self.handle_complete_task(task_id).await
    }

    /// Delete a task from the user's task list.
    #[tool]
    async fn delete_task(
        &self,
        /// The ID of the task to delete (e.g., "3")
        task_id: String,
    ) -> McpResult<String> {
        self.handle_delete_task(task_id).await
    }

    /// Update a task's description or priority. Fields not given are left unchanged.
    #[tool]
    async fn update_task(
        &self,
        /// The ID of the task to update (e.g., "3")
        task_id: String,
        /// New task description (optional)
        description: Option<String>,
        /// New task priority: High/Medium/Low (optional)
        priority: Option<String>,
    ) -> McpResult<String> {
        self.handle_update_task(task_id, description, priority).await
    }
}
