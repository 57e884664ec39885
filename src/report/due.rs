//! Due-date normalization.
//!
//! The remote API has shipped due dates in two representations: an epoch
//! offset in milliseconds and an RFC 3339 timestamp string. Exactly one
//! format is selected per run via configuration, so a well-formed value of
//! the other format is never silently misread.

use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;

/// Wire format for task due dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DueDateFormat {
    /// Epoch offset in milliseconds, UTC.
    #[default]
    EpochMillis,
    /// RFC 3339 timestamp string.
    Rfc3339,
}

impl std::fmt::Display for DueDateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueDateFormat::EpochMillis => write!(f, "epoch-millis"),
            DueDateFormat::Rfc3339 => write!(f, "rfc3339"),
        }
    }
}

impl DueDateFormat {
    /// Normalize a raw due-date value into a comparable instant.
    ///
    /// Total: absent, empty, or unparseable input yields the far-future
    /// sentinel rather than an error, so tasks without a usable due date
    /// always sort last.
    pub fn normalize(self, raw: Option<&str>) -> DateTime<Utc> {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return no_due_date(),
        };

        match self {
            DueDateFormat::EpochMillis => raw
                .parse::<i64>()
                .ok()
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .unwrap_or_else(no_due_date),
            DueDateFormat::Rfc3339 => DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| no_due_date()),
        }
    }
}

/// Sentinel substituted when a task has no parseable due date.
///
/// Renderers must special-case this as "No due date" instead of printing
/// the literal year.
pub fn no_due_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap()
}

/// Whether an instant is the missing-due-date sentinel.
pub fn is_no_due_date(when: DateTime<Utc>) -> bool {
    when == no_due_date()
}
