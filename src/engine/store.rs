//! Task Store: Owns the in-memory task collection and all mutations.

use super::types::Task;

/// The canonical in-memory task collection.
///
/// Ordering is newest-first by insertion. Every mutation goes through this
/// type; callers persist and re-render from it as the single source of truth.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Wraps a loaded collection.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns the full collection in store order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Adds a task to the front of the collection and returns a copy of it.
    ///
    /// Whitespace-only text is rejected: returns `None` and leaves the
    /// collection unchanged.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let task = Task::new(trimmed);
        self.tasks.insert(0, task.clone());
        Some(task)
    }

    /// Flips the completed flag on the task matching `id` exactly.
    ///
    /// Returns `false` (and changes nothing) when no task matches.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the task matching `id` exactly. Missing ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Drops every completed task, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Resolves a user-supplied reference (full id or id prefix) to a task id.
    ///
    /// A prefix must match exactly one task; ambiguous prefixes resolve to
    /// nothing rather than guessing.
    #[must_use]
    pub fn resolve(&self, query: &str) -> Option<String> {
        if query.is_empty() {
            return None;
        }
        if let Some(task) = self.tasks.iter().find(|t| t.id == query) {
            return Some(task.id.clone());
        }
        let mut matches = self.tasks.iter().filter(|t| t.id.starts_with(query));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.id.clone())
    }
}
