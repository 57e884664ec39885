//! Grouping by list.

use std::collections::BTreeMap;

use serde::Serialize;

use super::due::DueDateFormat;
use super::rank;
use crate::models::Task;

/// Label substituted for tasks whose list name is empty.
pub const NO_LIST: &str = "No List";

/// Tasks sharing a list name, ordered for display.
#[derive(Debug, Clone, Serialize)]
pub struct ListGroup {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Partition tasks by list name.
///
/// Groups come back in ascending byte-wise name order, each re-sorted with
/// the display comparator regardless of input order. Every input task lands
/// in exactly one group; list names with no tasks never appear.
pub fn group_by_list(tasks: &[Task], format: DueDateFormat) -> Vec<ListGroup> {
    let mut by_list: BTreeMap<String, Vec<Task>> = BTreeMap::new();
    for task in tasks {
        let name = if task.list_name.is_empty() {
            NO_LIST.to_string()
        } else {
            task.list_name.clone()
        };
        by_list.entry(name).or_default().push(task.clone());
    }

    by_list
        .into_iter()
        .map(|(name, mut tasks)| {
            rank::sort_tasks(&mut tasks, format);
            ListGroup { name, tasks }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, list: &str) -> Task {
        let mut task = Task::new(id, id);
        task.list_name = list.to_string();
        task
    }

    #[test]
    fn test_partition_is_lossless() {
        let tasks = vec![
            task("a", "Alpha"),
            task("b", "Beta"),
            task("c", "Alpha"),
            task("d", ""),
        ];
        let groups = group_by_list(&tasks, DueDateFormat::EpochMillis);

        let total: usize = groups.iter().map(|g| g.tasks.len()).sum();
        assert_eq!(total, tasks.len());
    }

    #[test]
    fn test_empty_list_name_becomes_no_list() {
        let groups = group_by_list(&[task("a", "")], DueDateFormat::EpochMillis);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, NO_LIST);
    }

    #[test]
    fn test_groups_ordered_bytewise_by_name() {
        // Byte-wise ordering is case-sensitive: uppercase sorts before
        // lowercase.
        let tasks = vec![task("a", "alpha"), task("b", "Zeta"), task("c", "Beta")];
        let groups = group_by_list(&tasks, DueDateFormat::EpochMillis);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Beta", "Zeta", "alpha"]);
    }

    #[test]
    fn test_groups_resorted_internally() {
        let mut urgent = task("urgent", "Alpha");
        urgent.priority = Some("urgent".to_string());
        let mut low = task("low", "Alpha");
        low.priority = Some("low".to_string());

        // Arrives low-first; the group must come back urgent-first.
        let groups = group_by_list(&[low, urgent], DueDateFormat::EpochMillis);
        assert_eq!(groups[0].tasks[0].id, "urgent");
        assert_eq!(groups[0].tasks[1].id, "low");
    }

    #[test]
    fn test_no_empty_groups() {
        let groups = group_by_list(&[], DueDateFormat::EpochMillis);
        assert!(groups.is_empty());
    }
}
