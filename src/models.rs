//! Task Models
//!
//! Data structures for the task list and its persisted shape.

use serde::{Deserialize, Serialize};

/// Unique task identifier. New ids come from the creation timestamp in
/// milliseconds, bumped past any existing id on collision.
pub type TaskId = u64;

/// One to-do item (serialized layout matches the localStorage schema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    pub fn new(id: TaskId, text: String, created_at: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }
}

/// Which slice of the list is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// Completion counters over the full list (never the filtered view)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}
