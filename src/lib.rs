//! Spyglass - a console reporting client for ClickUp spaces.
//!
//! This library provides the core functionality for the `spy` CLI tool:
//! fetching every list and task in a space, bucketing tasks by status,
//! sorting them by urgency, and grouping them by list for display.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod render;
pub mod report;

/// Library-level error type for Spyglass operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Config(String),

    #[error("ClickUp API error: {0}")]
    Api(#[from] api::ApiError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Spyglass operations.
pub type Result<T> = std::result::Result<T, Error>;
