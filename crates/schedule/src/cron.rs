//! Bridge from canonical 5-field schedules to the `cron` crate.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use cron::Schedule;

use crate::error::ScheduleError;
use crate::normalize::normalize_schedule;

/// Convert a 5-field cron expression to 6-field by prepending "0 " for seconds.
///
/// The `cron` crate requires 6 fields: `sec min hour day-of-month month
/// day-of-week`. Canonical expressions from [`normalize_schedule`] are
/// 5-field; anything else passes through trimmed.
pub fn to_six_field(expr: &str) -> String {
    let trimmed = expr.trim();
    if trimmed.split_whitespace().count() == 5 {
        format!("0 {}", trimmed)
    } else {
        trimmed.to_string()
    }
}

/// Normalize and parse a schedule string into a [`Schedule`].
///
/// Unlike [`normalize_schedule`], which signals malformed input with a bare
/// `None`, this reports what went wrong: a field count outside {5, 6}, or a
/// field the `cron` crate rejects.
pub fn parse_schedule(expr: Option<&str>) -> Result<Schedule, ScheduleError> {
    let canonical = match normalize_schedule(expr) {
        Some(c) => c,
        None => {
            let count = expr.map_or(0, |e| e.split_whitespace().count());
            return Err(ScheduleError::FieldCount(count));
        }
    };
    Schedule::from_str(&to_six_field(&canonical)).map_err(|source| ScheduleError::Parse {
        expr: canonical,
        source,
    })
}

/// Check if a cron schedule is due at `now`.
///
/// A schedule is due if its most recent tick falls between `last_run`
/// (exclusive) and `now` (inclusive). With no `last_run`, any tick in the
/// trailing 24 h window counts.
pub fn is_due(schedule: &Schedule, now: DateTime<Utc>, last_run: Option<DateTime<Utc>>) -> bool {
    let check_from = last_run.unwrap_or(now - chrono::Duration::days(1));
    if let Some(next) = schedule.after(&check_from).next() {
        next <= now
    } else {
        false
    }
}
