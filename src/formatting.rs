//! Formatting helper functions
//!
//! Text rendering shared by the console and the MCP tools.

use crate::operation::Outcome;
use crate::todo::Task;

/// Descriptions longer than this are truncated in the console table
const DESCRIPTION_WIDTH: usize = 50;

/// Format tasks as a list for MCP responses
///
/// # Arguments
/// * `tasks` - Tasks in display order
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format!(
            "- [{}] {} (priority: {}, completed: {})\n",
            task.id,
            task.description,
            task.priority,
            if task.completed { "yes" } else { "no" }
        ));
        result.push_str(&format!("  Created: {}\n", task.created_at.to_rfc3339()));
    }

    result
}

/// Format tasks as the console table
pub fn format_task_table(tasks: &[Task]) -> String {
    let rule = "-".repeat(80);
    let mut result = format!("\n{}\n", rule);
    result.push_str(&format!(
        "{:<4} {:<8} {:<10} {:<50}\n",
        "ID", "Status", "Priority", "Description"
    ));
    result.push_str(&format!("{}\n", rule));

    for task in tasks {
        result.push_str(&format!(
            "{:<4} {:<8} {:<10} {:<50}\n",
            task.id,
            task.status_label(),
            task.priority.as_str(),
            truncate_description(&task.description)
        ));
    }

    result.push_str(&format!("{}\n", rule));
    result
}

/// Shorten a description to fit the table column
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_WIDTH {
        let head: String = description.chars().take(DESCRIPTION_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

/// One-line confirmation for a mutating outcome
///
/// Listings have no confirmation line and render as `format_tasks`.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(task) => format!(
            "Task added: [{}] {} (Priority: {})",
            task.id, task.description, task.priority
        ),
        Outcome::Listed(tasks) => format_tasks(tasks),
        Outcome::Completed(task) => format!(
            "Task {}: [{}] {}",
            if task.completed {
                "marked as complete"
            } else {
                "marked as incomplete"
            },
            task.id,
            task.description
        ),
        Outcome::Deleted(task) => format!("Task deleted: [{}] {}", task.id, task.description),
        Outcome::Updated(task) => format!(
            "Task updated: [{}] {} (Priority: {})",
            task.id, task.description, task.priority
        ),
    }
}
