use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by a `TaskList`, starting at 1
pub type TaskId = u64;

/// Task priority
///
/// The textual form is exactly `High`, `Medium` or `Low`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item
///
/// Tasks are only created by `TaskList::add`, which assigns the id and
/// stores the trimmed description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier within the owning collection
    pub id: TaskId,
    /// Trimmed, non-empty description
    pub description: String,
    /// Priority (defaults to Medium)
    pub priority: Priority,
    /// Completion flag
    pub completed: bool,
    /// Creation time, never changed after construction
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: TaskId, description: String, priority: Priority) -> Self {
        Self {
            id,
            description,
            priority,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Status label used in listings
    pub fn status_label(&self) -> &'static str {
        if self.completed { "✓ DONE" } else { "○ TODO" }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | Priority: {} | Status: {}",
            self.id,
            self.description,
            self.priority,
            self.status_label()
        )
    }
}

/// Trim a description and reject it when nothing is left
pub(crate) fn normalize_description(description: &str) -> Result<String, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}
