//! cleanmate - A small CLI to schedule cleaning chores and keep track of them
//!
//! This library provides the task list model, the theme preference, the
//! tip-of-the-day selector, and the key-value storage they persist through.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod draft;
pub mod models;
pub mod output;
pub mod paths;
pub mod preferences;
pub mod storage;
pub mod tips;

pub use draft::TaskDraft;
pub use models::{Task, Theme};
pub use preferences::PreferenceStore;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, TaskStore};
pub use tips::TipOfDay;
