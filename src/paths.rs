//! Centralized path definitions for cleanmate
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.cleanmate/
//! ├── config.toml               # User configuration
//! └── data/                     # Default key-value data directory
//!     ├── tasks
//!     └── theme
//! ```

use std::path::PathBuf;

/// Global directory name
const GLOBAL_DIR: &str = ".cleanmate";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Data subdirectory
const DATA_DIR: &str = "data";

/// Get the global cleanmate directory.
///
/// Returns `~/.cleanmate/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.cleanmate/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Get the default data directory.
///
/// Returns `~/.cleanmate/data/`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    global_config_dir().join(DATA_DIR)
}
