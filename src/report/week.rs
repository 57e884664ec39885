//! Weekly completion window.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};

use crate::models::Task;

/// Whether a completed task was closed within the current calendar week.
///
/// The week runs from the most recent Sunday at 00:00:00 UTC to the
/// following Sunday, both bounds exclusive. Tasks without a parseable
/// epoch-millisecond closure timestamp never count. `now` is an explicit
/// input so callers control the reference instant.
pub fn completed_this_week(task: &Task, now: DateTime<Utc>) -> bool {
    let closed = match task
        .date_closed
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
    {
        Some(when) => when,
        None => return false,
    };

    let days_from_sunday = i64::from(now.weekday().num_days_from_sunday());
    let week_start = (now.date_naive() - Duration::days(days_from_sunday))
        .and_time(NaiveTime::MIN)
        .and_utc();
    let week_end = week_start + Duration::days(7);

    week_start < closed && closed < week_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// A known Wednesday, mid-day.
    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 15, 12, 0, 0).unwrap()
    }

    fn closed_at(when: DateTime<Utc>) -> Task {
        let mut task = Task::new("t", "t");
        task.date_closed = Some(when.timestamp_millis().to_string());
        task
    }

    #[test]
    fn test_monday_same_week_counts() {
        let monday = Utc.with_ymd_and_hms(2023, 11, 13, 10, 0, 0).unwrap();
        assert!(completed_this_week(&closed_at(monday), wednesday()));
    }

    #[test]
    fn test_prior_saturday_does_not_count() {
        let saturday = Utc.with_ymd_and_hms(2023, 11, 11, 10, 0, 0).unwrap();
        assert!(!completed_this_week(&closed_at(saturday), wednesday()));
    }

    #[test]
    fn test_week_start_boundary_excluded() {
        // Sunday 00:00:00 exactly is outside the window.
        let week_start = Utc.with_ymd_and_hms(2023, 11, 12, 0, 0, 0).unwrap();
        assert!(!completed_this_week(&closed_at(week_start), wednesday()));

        // One second in counts.
        let just_inside = Utc.with_ymd_and_hms(2023, 11, 12, 0, 0, 1).unwrap();
        assert!(completed_this_week(&closed_at(just_inside), wednesday()));
    }

    #[test]
    fn test_next_sunday_excluded() {
        let next_sunday = Utc.with_ymd_and_hms(2023, 11, 19, 0, 0, 0).unwrap();
        assert!(!completed_this_week(&closed_at(next_sunday), wednesday()));

        let saturday_night = Utc.with_ymd_and_hms(2023, 11, 18, 23, 59, 59).unwrap();
        assert!(completed_this_week(&closed_at(saturday_night), wednesday()));
    }

    #[test]
    fn test_missing_or_bad_close_date() {
        let mut task = Task::new("t", "t");
        assert!(!completed_this_week(&task, wednesday()));

        task.date_closed = Some("soon".to_string());
        assert!(!completed_this_week(&task, wednesday()));
    }

    #[test]
    fn test_now_on_sunday_uses_that_sunday() {
        // When `now` is itself a Sunday, the window starts that same day.
        let sunday_noon = Utc.with_ymd_and_hms(2023, 11, 12, 12, 0, 0).unwrap();
        let that_morning = Utc.with_ymd_and_hms(2023, 11, 12, 8, 0, 0).unwrap();
        let day_before = Utc.with_ymd_and_hms(2023, 11, 11, 8, 0, 0).unwrap();

        assert!(completed_this_week(&closed_at(that_morning), sunday_noon));
        assert!(!completed_this_week(&closed_at(day_before), sunday_noon));
    }
}
