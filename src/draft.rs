//! Pending task input
//!
//! The name and due date a user is filling in before the task is created.
//! After a successful submit the name is cleared and the due date goes back
//! to today; a rejected submit leaves the draft as it was.

use crate::models::{Task, today};
use crate::storage::{KeyValueStore, StorageError, TaskStore};

/// Task being composed, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Pending task name
    pub name: String,
    /// Pending due date (`YYYY-MM-DD`)
    pub due_date: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            due_date: today(),
        }
    }
}

impl TaskDraft {
    /// Empty draft due today
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a template as the task name
    pub fn select_template(&mut self, template: &str) {
        template.clone_into(&mut self.name);
    }

    /// Set the task name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the due date
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.due_date = due_date.into();
    }

    /// Create the task in `store`
    ///
    /// Returns the new task, or `None` if the draft was incomplete.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut TaskStore<S>,
    ) -> Result<Option<Task>, StorageError> {
        let before = store.tasks().len();
        let tasks = store.add(&self.name, &self.due_date)?;
        if tasks.len() == before {
            return Ok(None);
        }

        let created = tasks.last().cloned();
        self.name.clear();
        self.due_date = today();
        Ok(created)
    }
}
