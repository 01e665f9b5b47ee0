//! Task storage
//!
//! Holds the ordered task list in memory and writes the whole list back to
//! the `tasks` key after every change. Tasks are only ever appended or
//! flipped to completed; nothing is reordered or removed.

use crate::models::Task;

use super::{KeyValueStore, StorageError};

/// Storage key for the serialized task list
pub const TASKS_KEY: &str = "tasks";

/// Serialize a task list into its stored JSON form
pub fn encode_tasks(tasks: &[Task]) -> Result<String, StorageError> {
    serde_json::to_string(tasks).map_err(|source| StorageError::Serialize {
        key: TASKS_KEY.to_string(),
        source,
    })
}

/// Parse a stored task list
pub fn decode_tasks(raw: &str) -> serde_json::Result<Vec<Task>> {
    serde_json::from_str(raw)
}

/// Task list kept in sync with a key-value store
#[derive(Debug)]
pub struct TaskStore<S> {
    storage: S,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Load the persisted task list
    ///
    /// Missing, unreadable, or malformed data yields an empty list.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.get(TASKS_KEY) {
            Ok(Some(raw)) => decode_tasks(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed task list: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read task list, starting empty: {e}");
                Vec::new()
            },
        };
        log::debug!("Loaded {} task(s)", tasks.len());

        Self { storage, tasks }
    }

    /// All tasks in insertion order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks not yet done
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_pending()).count()
    }

    /// Number of tasks marked done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.pending_count()
    }

    /// Add a new task and persist the list
    ///
    /// A blank name or due date is ignored: nothing is created or written.
    pub fn add(&mut self, name: &str, due_date: &str) -> Result<&[Task], StorageError> {
        if name.trim().is_empty() || due_date.trim().is_empty() {
            log::debug!("Ignoring add with blank name or due date");
            return Ok(&self.tasks);
        }

        let task = Task::new(self.next_id()?, name, due_date);
        log::debug!("Adding task {} '{}' due {}", task.id, task.name, task.due_date);
        self.tasks.push(task);

        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(&self.tasks)
    }

    /// Mark a task as done and persist the list
    ///
    /// Unknown IDs and tasks that are already done leave everything untouched.
    pub fn mark_done(&mut self, id: u64) -> Result<&[Task], StorageError> {
        let changed: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.id == id && !t.completed)
            .map(|(i, _)| i)
            .collect();

        if changed.is_empty() {
            log::debug!("Nothing to mark done for task {id}");
            return Ok(&self.tasks);
        }

        for &i in &changed {
            self.tasks[i].completed = true;
        }
        if let Err(e) = self.save() {
            for &i in &changed {
                self.tasks[i].completed = false;
            }
            return Err(e);
        }

        log::debug!("Marked task {id} done");
        Ok(&self.tasks)
    }

    /// Write the full list to storage
    fn save(&self) -> Result<(), StorageError> {
        let raw = encode_tasks(&self.tasks)?;
        self.storage.set(TASKS_KEY, &raw)
    }

    /// Next task ID: the current time in milliseconds, bumped past the
    /// largest existing ID so IDs stay unique and increasing
    fn next_id(&self) -> Result<u64, StorageError> {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        match self.tasks.iter().map(|t| t.id).max() {
            None => Ok(now),
            Some(max) => max
                .checked_add(1)
                .map(|next| now.max(next))
                .ok_or(StorageError::IdsExhausted(max)),
        }
    }
}
