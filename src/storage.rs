use crate::todo::TaskList;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// TOML snapshot file for one task collection
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the collection; a missing or empty file is an empty collection
    pub fn load(&self) -> Result<TaskList> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "no snapshot yet, starting empty");
            return Ok(TaskList::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("read {}", self.file_path.display()))?;
        let data: TaskList = toml::from_str(&content)
            .with_context(|| format!("parse {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), tasks = data.len(), "snapshot loaded");
        Ok(data)
    }

    /// Write the whole collection (tasks, order and counter) in one snapshot
    ///
    /// The snapshot goes to a temp file in the same directory which then
    /// replaces the target, so readers never see a half-written file.
    pub fn save(&self, data: &TaskList) -> Result<()> {
        let content = toml::to_string_pretty(data).context("serialize task list")?;

        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        temp.write_all(content.as_bytes())?;
        temp.persist(&self.file_path)
            .with_context(|| format!("write {}", self.file_path.display()))?;

        debug!(path = %self.file_path.display(), tasks = data.len(), "snapshot saved");
        Ok(())
    }
}
