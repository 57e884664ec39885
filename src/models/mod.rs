//! Data models for Spyglass.
//!
//! This module defines the core data structures:
//! - `Task` - An immutable task snapshot fetched from the workspace
//! - `TaskBucket` - The mutually exclusive status classification
//! - `PriorityTier` - Display tier used for priority coloring

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive classification of a task's current state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskBucket {
    Completed,
    InProgress,
    #[default]
    Todo,
}

impl fmt::Display for TaskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskBucket::Completed => write!(f, "Completed"),
            TaskBucket::InProgress => write!(f, "In Progress"),
            TaskBucket::Todo => write!(f, "To Do"),
        }
    }
}

/// Display tier for priority coloring.
///
/// Derived from the priority rank; `None` covers both the lowest tier and
/// tasks with no priority at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityTier {
    Urgent,
    High,
    Normal,
    None,
}

/// A task snapshot fetched from the workspace.
///
/// Field values are kept as the API returned them; all normalization
/// (priority rank, due-date parsing, status bucketing) happens in the
/// `report` module through total functions that never reject a value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Remote task identifier, passed through unmodified.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Raw priority label, if the task has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Raw due date in the configured wire format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Free-text status label; empty means unclassified.
    #[serde(default)]
    pub status: String,

    /// Owning list name; empty means no list.
    #[serde(default)]
    pub list_name: String,

    /// Closure timestamp in epoch milliseconds, meaningful for completed tasks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_closed: Option<String>,
}

impl Task {
    /// Create a task with the given ID and name and nothing else set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority: None,
            due_date: None,
            status: String::new(),
            list_name: String::new(),
            date_closed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_display() {
        assert_eq!(TaskBucket::Completed.to_string(), "Completed");
        assert_eq!(TaskBucket::InProgress.to_string(), "In Progress");
        assert_eq!(TaskBucket::Todo.to_string(), "To Do");
    }

    #[test]
    fn test_bucket_default_is_todo() {
        assert_eq!(TaskBucket::default(), TaskBucket::Todo);
    }

    #[test]
    fn test_task_roundtrips_through_json() {
        let mut task = Task::new("abc123", "Write the report");
        task.priority = Some("high".to_string());
        task.status = "in progress".to_string();

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "abc123");
        assert_eq!(back.priority.as_deref(), Some("high"));
        assert!(back.due_date.is_none());
    }
}
