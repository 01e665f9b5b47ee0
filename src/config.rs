//! Global configuration management
//!
//! Config is stored at `~/.cleanmate/config.toml`. A missing or unparsable
//! file falls back to defaults.
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/.local/share/cleanmate"
//!
//! [tasks]
//! templates = ["Clean Kitchen", "Water Plants"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::TASK_TEMPLATES;
use crate::paths;

/// Global cleanmate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where data is kept
    #[serde(default)]
    pub storage: StorageConfig,
    /// Task creation settings
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory override (default `~/.cleanmate/data`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Task creation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Task name templates offered by `add --template`
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,
}

fn default_templates() -> Vec<String> {
    TASK_TEMPLATES.iter().map(ToString::to_string).collect()
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            templates: default_templates(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the global path, or defaults if absent
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if absent or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        fs::read_to_string(path)
            .ok()
            .and_then(|content| {
                toml::from_str(&content)
                    .map_err(|e| log::warn!("Ignoring invalid config {}: {e}", path.display()))
                    .ok()
            })
            .unwrap_or_default()
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Effective data directory
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(paths::default_data_dir)
    }
}
