//! Storage abstraction for tasks and preferences
//!
//! Everything cleanmate persists goes through a flat string key-value store.
//! Values are written whole on every change; there is no delta persistence.
//!
//! Provides pluggable backends:
//! - `file`: one file per key inside a data directory (default)
//! - `memory`: process-local map (tests, embedding)

/// File-backed key-value store
pub mod file;
/// In-memory key-value store
pub mod memory;
/// Task list persistence and mutation
pub mod task;

use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying medium failed
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        /// Key being accessed
        key: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Key cannot be mapped onto the backend
    #[error("invalid storage key: '{0}'")]
    InvalidKey(String),

    /// A value could not be serialized before writing
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        /// Key being written
        key: String,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The largest task ID is already taken
    #[error("no task ID left above {0}")]
    IdsExhausted(u64),
}

/// Durable string key-value store
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub use file::FileStore;
pub use memory::MemoryStore;
pub use task::{TASKS_KEY, TaskStore};
