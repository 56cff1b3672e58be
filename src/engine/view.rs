//! Filter/View Projection: Derives the visible subset of the task list.
//!
//! Pure functions over the store's collection. Nothing here mutates; the
//! projection is recomputed on every render.

use super::types::Task;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// The current view restriction.
///
/// Process-wide UI state, never persisted; every invocation starts at `All`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Active/completed/total tallies for the status readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub active: usize,
    pub completed: usize,
    pub total: usize,
}

/// Tallies the collection.
#[must_use]
pub fn counts(tasks: &[Task]) -> Counts {
    let completed = tasks.iter().filter(|t| t.completed).count();
    Counts {
        active: tasks.len() - completed,
        completed,
        total: tasks.len(),
    }
}

/// Projects the visible subset for `filter`, preserving store order.
#[must_use]
pub fn project(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| match filter {
            Filter::All => true,
            Filter::Active => !t.completed,
            Filter::Completed => t.completed,
        })
        .collect()
}
