//! Core types for the ticklist system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry.
///
/// `id` and `created_at` are fixed at construction; `completed` is the only
/// field that changes over a task's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Creates a new pending task with a fresh id and creation timestamp.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            completed: false,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// First 8 characters of the id, used for display and short references.
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..8.min(self.id.len())]
    }
}
