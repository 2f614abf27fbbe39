// Task store: authoritative in-memory list mirrored to one storage slot

use crate::slot::SlotStorage;
use crate::task::Task;
use eyre::{Context, Result, eyre};
use std::path::Path;
use tracing::{debug, info};

/// Slot key the task list is persisted under
const TASKS_KEY: &str = "tasks";

/// Owns the authoritative in-memory task list and mirrors every mutation to
/// a single storage slot in full-document form.
///
/// Mutations persist synchronously: `Ok` means memory and the durable mirror
/// agree, `Err` means the mutation did not happen and the list is unchanged.
/// Construct one store at startup and hand it to the consumers that need it.
pub struct TaskStore {
    storage: SlotStorage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store rooted at the given directory and load the persisted
    /// task list.
    ///
    /// An absent slot yields an empty list. An unreadable or corrupt
    /// document is an error; the caller decides how to recover.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let storage = SlotStorage::open(dir)?;

        let tasks: Vec<Task> = match storage.read(TASKS_KEY)? {
            Some(document) => serde_json::from_str(&document)
                .context("Failed to deserialize persisted task list")?,
            None => Vec::new(),
        };

        info!(count = tasks.len(), "Loaded task list");
        Ok(Self { storage, tasks })
    }

    /// Open a store at the per-user default location.
    pub fn open_default() -> Result<Self> {
        Self::open(SlotStorage::default_dir()?)
    }

    /// Current snapshot of the task sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks in the snapshot.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the snapshot holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Create a task and append it to the end of the list.
    ///
    /// Title and description are trimmed; an empty trimmed title is
    /// rejected. Returns the created task once it has been persisted.
    pub fn add_task(&mut self, title: &str, description: &str) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(eyre!("Task title cannot be empty"));
        }

        let task = Task::new(title, description);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        debug!(id = %task.id, "Added task");
        Ok(task)
    }

    /// Invert the completion flag of the task with the given id.
    ///
    /// Positions of all tasks are preserved. Returns the updated task, or
    /// `Ok(None)` without touching storage when no task has that id.
    pub fn toggle_task(&mut self, id: &str) -> Result<Option<Task>> {
        let pos = match self.tasks.iter().position(|t| t.id == id) {
            Some(pos) => pos,
            None => {
                debug!(id, "Toggle skipped, no such task");
                return Ok(None);
            }
        };

        let mut next = self.tasks.clone();
        next[pos].completed = !next[pos].completed;
        self.commit(next)?;

        debug!(id, completed = self.tasks[pos].completed, "Toggled task");
        Ok(Some(self.tasks[pos].clone()))
    }

    /// Remove the task with the given id, preserving the relative order of
    /// the rest.
    ///
    /// Returns `Ok(false)` without touching storage when no task has that
    /// id.
    pub fn delete_task(&mut self, id: &str) -> Result<bool> {
        if !self.tasks.iter().any(|t| t.id == id) {
            debug!(id, "Delete skipped, no such task");
            return Ok(false);
        }

        let next: Vec<Task> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next)?;

        debug!(id, "Deleted task");
        Ok(true)
    }

    /// Persist `next` as the full document, then make it the in-memory
    /// list. On persist failure the current list stays in place.
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        let document = serde_json::to_string(&next).context("Failed to serialize task list")?;
        self.storage.write(TASKS_KEY, &document)?;
        self.tasks = next;
        Ok(())
    }
}
