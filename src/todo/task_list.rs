use crate::error::TaskError;
use crate::todo::task::{Priority, Task, TaskId, normalize_description};
use std::collections::HashMap;
use tracing::debug;

/// Ordered, ID-indexed collection of tasks for one owner
///
/// Tasks live in a HashMap for O(1) lookup by id. A separate Vec of ids keeps
/// insertion order, so listings always come back in creation order no matter
/// which tasks were deleted in between. Both structures are updated together
/// by every mutating operation.
///
/// Ids come from `next_id`, which only ever grows: a deleted task's id is never
/// handed out again.
///
/// Every operation validates its input before touching any state, so a
/// returned error always means the collection is unchanged.
#[derive(Debug, Clone)]
pub struct TaskList {
    pub(crate) tasks: HashMap<TaskId, Task>,
    pub(crate) order: Vec<TaskId>,
    pub(crate) next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new task
    ///
    /// # Arguments
    /// * `description` - Task description, stored trimmed; must not be blank
    /// * `priority` - Task priority
    ///
    /// # Returns
    /// The new task with its assigned id
    pub fn add(&mut self, description: &str, priority: Priority) -> Result<&Task, TaskError> {
        let description = normalize_description(description)?;

        let id = self.next_id;
        self.next_id += 1;
        self.order.push(id);
        debug!(id, %priority, "task added");

        Ok(&*self
            .tasks
            .entry(id)
            .or_insert(Task::new(id, description, priority)))
    }

    /// Remove a task and return it
    pub fn delete(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let task = self.tasks.remove(&id).ok_or(TaskError::NotFound(id))?;
        self.order.retain(|&existing| existing != id);
        debug!(id, "task deleted");
        Ok(task)
    }

    /// Update the description and/or priority of a task
    ///
    /// Only the supplied fields change. Both fields are checked before either
    /// one is written.
    pub fn update(
        &mut self,
        id: TaskId,
        description: Option<&str>,
        priority: Option<Priority>,
    ) -> Result<&Task, TaskError> {
        let task = self.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;

        let description = description.map(normalize_description).transpose()?;

        if let Some(description) = description {
            task.description = description;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        debug!(id, "task updated");
        Ok(&*task)
    }

    /// Look up a task by id
    pub fn get(&self, id: TaskId) -> Result<&Task, TaskError> {
        self.tasks.get(&id).ok_or(TaskError::NotFound(id))
    }

    /// All tasks in insertion order
    pub fn list(&self) -> Vec<&Task> {
        self.iter().collect()
    }

    /// Iterate over tasks in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// Flip the completion flag of a task
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<&Task, TaskError> {
        let task = self.tasks.get_mut(&id).ok_or(TaskError::NotFound(id))?;
        task.completed = !task.completed;
        debug!(id, completed = task.completed, "task completion toggled");
        Ok(&*task)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Id the next added task will receive
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }
}
