use chrono::Utc;

use crate::model::task::{Priority, Task};

/// The authoritative in-memory task list.
///
/// All mutation goes through the methods here; there is no ambient global.
/// The store tracks a dirty flag so the owner can decide when to persist —
/// the store itself never does I/O.
#[derive(Debug, Default)]
pub struct TodoStore {
    tasks: Vec<Task>,
    /// High-water mark for assigned ids. Ids are creation timestamps in
    /// milliseconds, bumped past this mark on collision so two adds in the
    /// same millisecond (or after loading newer ids) stay distinct.
    last_id: i64,
    dirty: bool,
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore::default()
    }

    /// Build a store from a loaded task list. Not dirty: nothing to save yet.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        TodoStore {
            tasks,
            last_id,
            dirty: false,
        }
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new task and return its id.
    ///
    /// `text` is assumed trimmed and non-empty — empty submissions are
    /// rejected by the caller before this is reached.
    pub fn add(&mut self, text: &str, priority: Priority) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        self.tasks.push(Task::new(id, text.to_string(), priority));
        self.dirty = true;
        id
    }

    /// Flip the completion flag of the task with `id`.
    /// Unknown ids are a silent no-op; returns whether anything changed.
    pub fn toggle(&mut self, id: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Remove the task with `id` if present; returns whether anything changed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.dirty = true;
            true
        } else {
            false
        }
    }

    /// Set the priority of the task with `id`; no-op on unknown id or
    /// unchanged value. Returns whether anything changed.
    pub fn set_priority(&mut self, id: i64, priority: Priority) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.priority != priority => {
                task.priority = priority;
                self.dirty = true;
                true
            }
            _ => false,
        }
    }

    /// Advance the task's priority one step around the cycle
    /// (low → medium → high → low). Returns the new priority, or None for
    /// an unknown id.
    pub fn cycle_priority(&mut self, id: i64) -> Option<Priority> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.priority = task.priority.cycle();
        self.dirty = true;
        Some(task.priority)
    }

    /// Replace the entire collection. Bulk path; input shape is trusted.
    /// The id high-water mark is recomputed so later adds stay unique.
    pub fn set_all(&mut self, tasks: Vec<Task>) {
        self.last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.tasks = tasks;
        self.dirty = true;
    }

    // -----------------------------------------------------------------------
    // Snapshot access
    // -----------------------------------------------------------------------

    /// The current snapshot, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether any effective mutation happened since load. The owner saves
    /// once after dispatch iff this is set.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
