//! Task operations as a closed set
//!
//! Both front ends describe what they want done as an `Operation`, and
//! `Operation::apply` maps each variant onto the matching `TaskList` call.
//! Agent tool calls (a tool name plus JSON arguments) decode into the same
//! enum, so an unsupported tool is rejected at decode time instead of at a
//! string lookup.

use crate::error::TaskError;
use crate::todo::{Priority, Task, TaskId, TaskList};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// A single request against a task collection
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum Operation {
    AddTask {
        description: String,
        #[serde(default)]
        priority: Option<String>,
    },
    ListTasks,
    CompleteTask {
        #[serde(deserialize_with = "deserialize_task_id")]
        task_id: TaskId,
    },
    DeleteTask {
        #[serde(deserialize_with = "deserialize_task_id")]
        task_id: TaskId,
    },
    UpdateTask {
        #[serde(deserialize_with = "deserialize_task_id")]
        task_id: TaskId,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        priority: Option<String>,
    },
}

/// Result of a successful operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Listed(Vec<Task>),
    /// Completion flag was toggled; the task carries the new value
    Completed(Task),
    Deleted(Task),
    Updated(Task),
}

/// Failure to decode an agent tool call
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Unknown tool '{0}'. Available tools: {tools}", tools = Operation::TOOL_NAMES.join(", "))]
    UnknownTool(String),
    #[error("Invalid arguments for tool '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Arguments for tool '{0}' must be a JSON object")]
    ArgumentsNotObject(String),
}

impl Operation {
    /// Tool names accepted by `from_tool_call`
    pub const TOOL_NAMES: [&'static str; 5] = [
        "add_task",
        "list_tasks",
        "complete_task",
        "delete_task",
        "update_task",
    ];

    /// Decode a tool call made by an agent
    ///
    /// # Arguments
    /// * `name` - Tool name (one of `TOOL_NAMES`)
    /// * `arguments` - JSON object with the tool arguments; blank means `{}`
    pub fn from_tool_call(name: &str, arguments: &str) -> Result<Self, OperationError> {
        if !Self::TOOL_NAMES.contains(&name) {
            return Err(OperationError::UnknownTool(name.to_string()));
        }

        let invalid = |source: serde_json::Error| OperationError::InvalidArguments {
            tool: name.to_string(),
            source,
        };

        let mut value = if arguments.trim().is_empty() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(arguments).map_err(invalid)?
        };

        let object = value
            .as_object_mut()
            .ok_or_else(|| OperationError::ArgumentsNotObject(name.to_string()))?;
        object.insert(
            "tool".to_string(),
            serde_json::Value::String(name.to_string()),
        );

        serde_json::from_value(value).map_err(invalid)
    }

    /// Tool name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddTask { .. } => "add_task",
            Operation::ListTasks => "list_tasks",
            Operation::CompleteTask { .. } => "complete_task",
            Operation::DeleteTask { .. } => "delete_task",
            Operation::UpdateTask { .. } => "update_task",
        }
    }

    /// Whether the operation leaves the collection untouched
    pub fn is_read_only(&self) -> bool {
        matches!(self, Operation::ListTasks)
    }

    /// Run the operation against a collection
    ///
    /// Priorities are parsed before the collection is touched, so an invalid
    /// priority leaves it unchanged like any other validation failure.
    pub fn apply(self, tasks: &mut TaskList) -> Result<Outcome, TaskError> {
        match self {
            Operation::AddTask {
                description,
                priority,
            } => {
                let priority = parse_priority(priority.as_deref())?.unwrap_or_default();
                let task = tasks.add(&description, priority)?;
                Ok(Outcome::Added(task.clone()))
            }
            Operation::ListTasks => Ok(Outcome::Listed(list_snapshot(tasks))),
            Operation::CompleteTask { task_id } => {
                let task = tasks.toggle_completion(task_id)?;
                Ok(Outcome::Completed(task.clone()))
            }
            Operation::DeleteTask { task_id } => Ok(Outcome::Deleted(tasks.delete(task_id)?)),
            Operation::UpdateTask {
                task_id,
                description,
                priority,
            } => {
                let priority = parse_priority(priority.as_deref())?;
                let task = tasks.update(task_id, description.as_deref(), priority)?;
                Ok(Outcome::Updated(task.clone()))
            }
        }
    }
}

/// Owned copy of every task in insertion order
pub fn list_snapshot(tasks: &TaskList) -> Vec<Task> {
    tasks.iter().cloned().collect()
}

fn parse_priority(priority: Option<&str>) -> Result<Option<Priority>, TaskError> {
    Ok(priority.map(str::parse::<Priority>).transpose()?)
}

/// Accept a task id as a JSON number or a numeric string
fn deserialize_task_id<'de, D>(deserializer: D) -> Result<TaskId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(TaskId),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("Invalid task ID format: {}", text))
        }),
    }
}
