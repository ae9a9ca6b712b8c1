//! Application configuration
//!
//! `Config` is built once at start-up (config file, then command-line
//! overrides) and handed by reference to the front ends.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Snapshot file for the task list; `None` keeps tasks in memory only
    pub data_file: Option<PathBuf>,
    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Console prompt
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            log_filter: "todo_mcp=info".to_string(),
            prompt: "todo> ".to_string(),
        }
    }
}

impl Config {
    /// Load a TOML config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
    }

    /// In-memory config that persists to `data_file`
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: Some(data_file.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_fills_missing_keys_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_file = \"tasks.toml\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("tasks.toml")));
        assert_eq!(config.log_filter, "todo_mcp=info");
        assert_eq!(config.prompt, "todo> ");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "prompt = ").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/todo-mcp.toml")).unwrap_err();
        assert!(err.to_string().contains("read /nonexistent/todo-mcp.toml"));
    }
}
