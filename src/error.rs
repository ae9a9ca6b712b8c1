//! Error types for task collection operations
//!
//! Every failure is a pure rejection: the collection is left exactly as it was
//! before the call.

use crate::todo::TaskId;
use thiserror::Error;

/// Malformed input for a task field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Description was empty or whitespace-only
    #[error("Description cannot be empty or whitespace-only")]
    EmptyDescription,
    /// Priority outside {High, Medium, Low}
    #[error("Invalid priority '{0}'. Must be High, Medium, or Low")]
    InvalidPriority(String),
}

/// Error returned by every `TaskList` operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Task {0} not found")]
    NotFound(TaskId),
}

impl TaskError {
    /// HTTP status an HTTP front end maps this error to
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::Validation(_) => 400,
            TaskError::NotFound(_) => 404,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound(_))
    }
}
