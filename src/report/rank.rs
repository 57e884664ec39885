//! Task ordering.

use std::cmp::Ordering;

use super::due::DueDateFormat;
use super::priority;
use crate::models::Task;

/// Total-order comparator for display sorting.
///
/// Priority rank ascending (1 first), then normalized due date ascending;
/// tasks without a usable due date sort last within their rank. Full ties
/// keep their original relative order, since callers sort with a stable
/// sort.
pub fn compare(a: &Task, b: &Task, format: DueDateFormat) -> Ordering {
    priority::rank(a.priority.as_deref())
        .cmp(&priority::rank(b.priority.as_deref()))
        .then_with(|| {
            format
                .normalize(a.due_date.as_deref())
                .cmp(&format.normalize(b.due_date.as_deref()))
        })
}

/// Sort a task collection for display.
///
/// This is the single ordering used everywhere tasks are shown: the flat
/// status tables and each per-list group.
pub fn sort_tasks(tasks: &mut [Task], format: DueDateFormat) {
    tasks.sort_by(|a, b| compare(a, b, format));
}
