//! Command implementations

mod status;
mod task;
mod theme;

pub use status::{dashboard, templates, tip};
pub use task::{add, done, list};
pub use theme::{theme_show, theme_toggle};

use cleanmate::config::Config;
use cleanmate::models::Theme;
use cleanmate::output::OutputMode;
use cleanmate::preferences::PreferenceStore;
use cleanmate::storage::{FileStore, TaskStore};

/// Everything a command needs: config, storage, and output mode
#[derive(Debug)]
pub struct Context {
    pub config: Config,
    pub storage: FileStore,
    pub mode: OutputMode,
}

impl Context {
    pub const fn new(config: Config, storage: FileStore, mode: OutputMode) -> Self {
        Self {
            config,
            storage,
            mode,
        }
    }

    /// Task list backed by this context's storage
    pub fn tasks(&self) -> TaskStore<&FileStore> {
        TaskStore::load(&self.storage)
    }

    /// Theme preference backed by this context's storage
    pub const fn preferences(&self) -> PreferenceStore<&FileStore> {
        PreferenceStore::new(&self.storage)
    }

    /// Theme currently in effect
    pub fn theme(&self) -> Theme {
        self.preferences().theme()
    }
}
