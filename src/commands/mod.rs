//! Command implementations for the Spyglass CLI.
//!
//! `report` is the whole program: enumerate the space's lists, collect
//! their tasks with a skip-and-continue policy, and hand the flat
//! collection to the report pipeline.

use chrono::Utc;

use crate::Result;
use crate::api::Client;
use crate::config::Config;
use crate::report::Report;

/// Fetch everything and compute the report.
///
/// Failing to enumerate lists aborts the run. Failing to fetch one list's
/// tasks is logged to stderr and that list is skipped; its tasks are simply
/// absent from the report. Progress lines go to stderr so stdout stays
/// clean for the report itself.
pub fn report(config: &Config) -> Result<Report> {
    let client = Client::new(config.api_key.clone());

    let lists = client.fetch_all_lists(&config.space_id)?;

    let mut tasks = Vec::new();
    for list in &lists {
        eprintln!("Fetching tasks from list: {}", list.name);
        match client.fetch_list_tasks(&list.id) {
            Ok(list_tasks) => tasks.extend(list_tasks),
            Err(e) => {
                eprintln!("Error getting tasks for list {}: {}", list.name, e);
                continue;
            }
        }
    }

    Ok(Report::build(
        tasks,
        config.due_date_format,
        Utc::now(),
        config.weekly_summary,
    ))
}
