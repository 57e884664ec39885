//! The report pipeline.
//!
//! Turns a flat task collection into the deterministic structures the
//! renderer consumes:
//! - `status` buckets every task into Completed / In Progress / To Do
//! - `priority` and `due` normalize raw labels into comparable keys
//! - `rank` is the single display ordering, reused everywhere
//! - `group` partitions a sorted bucket by list name
//! - `week` evaluates the Sunday-anchored completion window
//!
//! Everything here is pure and synchronous; identical input and `now`
//! produce an identical report.

pub mod due;
pub mod group;
pub mod priority;
pub mod rank;
pub mod status;
pub mod week;

use chrono::{DateTime, Utc};
use serde::Serialize;

use self::due::DueDateFormat;
use self::group::ListGroup;
use crate::models::{Task, TaskBucket};

/// Tasks partitioned by status bucket, input order preserved.
#[derive(Debug, Default)]
pub struct StatusBuckets {
    pub completed: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub todo: Vec<Task>,
}

/// Partition tasks into status buckets.
///
/// Classification is total: every task lands in exactly one bucket, and
/// tasks with an empty status label land in To Do.
pub fn classify_tasks(tasks: Vec<Task>) -> StatusBuckets {
    let mut buckets = StatusBuckets::default();
    for task in tasks {
        match status::classify(&task.status) {
            TaskBucket::Completed => buckets.completed.push(task),
            TaskBucket::InProgress => buckets.in_progress.push(task),
            TaskBucket::Todo => buckets.todo.push(task),
        }
    }
    buckets
}

/// Headline counts for the summary section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary {
    pub completed: usize,
    pub todo: usize,
    pub in_progress: usize,
}

/// The fully computed report consumed by the renderer.
#[derive(Debug, Serialize)]
pub struct Report {
    pub summary: Summary,
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
    pub todo_by_list: Vec<ListGroup>,
    pub in_progress_by_list: Vec<ListGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_this_week: Option<usize>,
}

impl Report {
    /// Build a report from a flat task collection.
    ///
    /// The To Do and In Progress buckets are sorted with the display
    /// comparator and then independently regrouped by list. The weekly
    /// completion count is evaluated over the Completed bucket against the
    /// given `now`, or skipped entirely when `weekly` is false.
    pub fn build(
        tasks: Vec<Task>,
        format: DueDateFormat,
        now: DateTime<Utc>,
        weekly: bool,
    ) -> Self {
        let StatusBuckets {
            completed,
            mut in_progress,
            mut todo,
        } = classify_tasks(tasks);

        rank::sort_tasks(&mut todo, format);
        rank::sort_tasks(&mut in_progress, format);

        let todo_by_list = group::group_by_list(&todo, format);
        let in_progress_by_list = group::group_by_list(&in_progress, format);

        let completed_this_week = weekly.then(|| {
            completed
                .iter()
                .filter(|task| week::completed_this_week(task, now))
                .count()
        });

        Report {
            summary: Summary {
                completed: completed.len(),
                todo: todo.len(),
                in_progress: in_progress.len(),
            },
            todo,
            in_progress,
            completed,
            todo_by_list,
            in_progress_by_list,
            completed_this_week,
        }
    }
}
