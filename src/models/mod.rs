//! Data models for cleanmate
//!
//! - Task: "What needs cleaning, and by when"
//! - Theme: "How the list is presented"

pub mod task;
pub mod theme;

pub use task::{TASK_TEMPLATES, Task, resolve_template, today};
pub use theme::Theme;
