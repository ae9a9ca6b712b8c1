//! Serialization and deserialization implementations for TaskList
//!
//! A snapshot stores the counter and the tasks in insertion order. The id
//! index is not serialized; it is rebuilt on load. Descriptions are stored
//! trimmed, and snapshots that would break any other collection invariant
//! are rejected.

use super::task::{Task, TaskId, normalize_description};
use super::task_list::TaskList;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Current snapshot format version
const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    format_version: u32,
    next_id: TaskId,
    tasks: Vec<&'a Task>,
}

#[derive(Deserialize)]
#[serde(default)]
struct Snapshot {
    format_version: u32,
    next_id: TaskId,
    tasks: Vec<Task>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            format_version: FORMAT_VERSION,
            next_id: 1,
            tasks: Vec::new(),
        }
    }
}

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SnapshotRef {
            format_version: FORMAT_VERSION,
            next_id: self.next_id,
            tasks: self.list(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let snapshot = Snapshot::deserialize(deserializer)?;

        if snapshot.format_version > FORMAT_VERSION {
            return Err(D::Error::custom(format!(
                "unsupported format_version {} (newest known: {})",
                snapshot.format_version, FORMAT_VERSION
            )));
        }

        let mut tasks = HashMap::with_capacity(snapshot.tasks.len());
        let mut order = Vec::with_capacity(snapshot.tasks.len());
        // Older snapshots may omit next_id; never go below max(id) + 1
        let mut next_id = snapshot.next_id.max(1);

        for mut task in snapshot.tasks {
            if task.id == 0 {
                return Err(D::Error::custom("task id must be positive"));
            }
            task.description = normalize_description(&task.description).map_err(|_| {
                D::Error::custom(format!("task {} has an empty description", task.id))
            })?;
            if tasks.contains_key(&task.id) {
                return Err(D::Error::custom(format!("duplicate task id {}", task.id)));
            }
            next_id = next_id.max(task.id + 1);
            order.push(task.id);
            tasks.insert(task.id, task);
        }

        Ok(TaskList {
            tasks,
            order,
            next_id,
        })
    }
}
