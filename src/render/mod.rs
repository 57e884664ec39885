//! Console rendering for computed reports.
//!
//! Tables are laid out with `comfy-table`; priority tiers and the weekly
//! summary line are colored with `colored`. All report output goes to
//! stdout.

use colored::Colorize;
use colored::control::SHOULD_COLORIZE;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::models::{PriorityTier, Task};
use crate::report::due::{self, DueDateFormat};
use crate::report::group::{self, ListGroup};
use crate::report::{Report, priority};

const DIVIDER_WIDTH: usize = 80;

/// Print the full console report.
pub fn print_report(report: &Report, format: DueDateFormat) {
    print_divider("=", DIVIDER_WIDTH);
    println!("ClickUp Tasks Report");
    print_divider("=", DIVIDER_WIDTH);
    println!();

    print_summary(report);

    println!("Tasks by Status:");
    if !report.todo.is_empty() {
        print_status_table("To Do Tasks", &report.todo, format);
    }
    if !report.in_progress.is_empty() {
        print_status_table("In Progress Tasks", &report.in_progress, format);
    }

    println!("Tasks by List:");
    if !report.todo_by_list.is_empty() {
        print_groups("To Do Tasks", &report.todo_by_list, format);
    }
    if !report.in_progress_by_list.is_empty() {
        print_groups("In Progress Tasks", &report.in_progress_by_list, format);
    }

    if let Some(count) = report.completed_this_week {
        print_divider("=", DIVIDER_WIDTH);
        println!();
        println!("Weekly Completion Summary:");
        print_divider("-", 23);
        println!("{}", format!("Tasks completed this week: {count}").green());
        print_divider("-", DIVIDER_WIDTH);
        println!();
    }

    print_divider("=", DIVIDER_WIDTH);
    println!("End of Report");
    print_divider("=", DIVIDER_WIDTH);
}

fn print_summary(report: &Report) {
    println!("Task Summary:");
    print_divider("-", 12);
    println!("Completed Tasks: {}", report.summary.completed);
    println!("To Do Tasks: {}", report.summary.todo);
    println!("In Progress Tasks: {}", report.summary.in_progress);
    print_divider("-", DIVIDER_WIDTH);
    println!();
}

fn print_status_table(title: &str, tasks: &[Task], format: DueDateFormat) {
    print_divider("=", DIVIDER_WIDTH);
    println!();
    println!("{title}:");
    print_divider("-", title.len() + 1);

    let mut table = new_table(&["Task Name", "List", "Due Date", "Priority"]);
    for task in tasks {
        table.add_row(task_row(task, format, true));
    }
    println!("{table}");

    print_divider("-", DIVIDER_WIDTH);
    println!();
}

fn print_groups(title: &str, groups: &[ListGroup], format: DueDateFormat) {
    print_divider("=", DIVIDER_WIDTH);
    println!();
    println!("{title} by List:");
    print_divider("-", title.len() + 9);

    for group in groups {
        println!();
        println!("List: {} ({} tasks)", group.name, group.tasks.len());
        print_divider("~", 40);

        let mut table = new_table(&["Task Name", "Due Date", "Priority"]);
        for task in &group.tasks {
            table.add_row(task_row(task, format, false));
        }
        println!("{table}");
    }

    print_divider("-", DIVIDER_WIDTH);
    println!();
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .iter()
            .map(|h| {
                if SHOULD_COLORIZE.should_colorize() {
                    Cell::new(h).fg(Color::Cyan)
                } else {
                    Cell::new(h)
                }
            })
            .collect::<Vec<_>>(),
    );
    table
}

fn task_row(task: &Task, format: DueDateFormat, with_list: bool) -> Vec<Cell> {
    let mut row = vec![Cell::new(&task.name)];
    if with_list {
        row.push(Cell::new(list_label(task)));
    }
    row.push(Cell::new(format_due(task, format)));

    let label = priority_label(task);
    let tier = priority::tier(task.priority.as_deref());
    row.push(match tier_color(tier) {
        Some(color) if SHOULD_COLORIZE.should_colorize() => Cell::new(label).fg(color),
        _ => Cell::new(label),
    });

    row
}

/// Table cell color for a priority tier.
fn tier_color(tier: PriorityTier) -> Option<Color> {
    match tier {
        PriorityTier::Urgent => Some(Color::Red),
        PriorityTier::High => Some(Color::Yellow),
        PriorityTier::Normal => Some(Color::Blue),
        PriorityTier::None => None,
    }
}

/// Format a due date for display, special-casing the missing-date sentinel.
fn format_due(task: &Task, format: DueDateFormat) -> String {
    let due = format.normalize(task.due_date.as_deref());
    if due::is_no_due_date(due) {
        "No due date".to_string()
    } else {
        due.format("%Y-%m-%d").to_string()
    }
}

fn priority_label(task: &Task) -> &str {
    task.priority.as_deref().unwrap_or("None")
}

fn list_label(task: &Task) -> &str {
    if task.list_name.is_empty() {
        group::NO_LIST
    } else {
        &task.list_name
    }
}

fn print_divider(ch: &str, len: usize) {
    println!("{}", ch.repeat(len));
}
