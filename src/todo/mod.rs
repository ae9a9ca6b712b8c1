//! Todo domain models and the ordered task collection
//!
//! - `task`: the task record and its priority
//! - `task_list`: the ID-indexed, insertion-ordered collection
//! - `serde_impl`: snapshot serialization for `TaskList`

mod serde_impl;
mod task;
mod task_list;

pub use task::{Priority, Task, TaskId};
pub use task_list::TaskList;
