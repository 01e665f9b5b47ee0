//! Task model
//!
//! A task is a single cleaning chore with a due date and a completion flag.
//! The serialized form uses camelCase field names (`dueDate`) so stored
//! task lists stay readable by other front ends sharing the same data.

use serde::{Deserialize, Serialize};

/// Suggested task names offered when creating a task
pub const TASK_TEMPLATES: [&str; 4] = ["Clean Kitchen", "Vacuum Bedroom", "Wash Dishes", "Mop Floor"];

/// A task - one cleaning chore instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (creation time in milliseconds, strictly increasing)
    pub id: u64,

    /// What needs to be cleaned
    pub name: String,

    /// Due date as `YYYY-MM-DD`
    pub due_date: String,

    /// Whether the task has been marked done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// Whether the task is still open
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        !self.completed
    }
}

/// Resolve a template reference to a template name
///
/// Accepts either a 1-based index into `templates` or a template name
/// (case-insensitive).
#[must_use]
pub fn resolve_template<'a>(templates: &'a [String], reference: &str) -> Option<&'a str> {
    let reference = reference.trim();
    if let Ok(index) = reference.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| templates.get(i)).map(String::as_str);
    }
    templates
        .iter()
        .find(|t| t.eq_ignore_ascii_case(reference))
        .map(String::as_str)
}

/// Today's local date in the stored `YYYY-MM-DD` format
#[must_use]
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
