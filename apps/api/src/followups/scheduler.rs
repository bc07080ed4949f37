//! Follow-up scheduling rules and pure transformations over the caller's
//! reminder working set. Nothing here persists; every operation returns a
//! fresh collection and leaves its input untouched.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

use crate::followups::models::{FollowUp, FollowUpType, JobStatus};

/// How far ahead the upcoming view looks.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;
/// How far a snooze pushes a reminder.
pub const SNOOZE_DAYS: i64 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("appliedDate '{0}' is not a valid date")]
    InvalidDate(String),

    #[error("cannot move {0} forward by {1} days")]
    OutOfRange(DateTime<Utc>, i64),
}

fn shift(at: DateTime<Utc>, by: Duration) -> Result<DateTime<Utc>, ScheduleError> {
    at.checked_add_signed(by)
        .ok_or(ScheduleError::OutOfRange(at, by.num_days()))
}

/// Derives the reminders for a job entering `status`.
///
/// Both applied and interview reminders are anchored on `applied_date`.
pub fn generate_follow_ups(
    job_id: &str,
    status: JobStatus,
    applied_date: DateTime<Utc>,
) -> Result<Vec<FollowUp>, ScheduleError> {
    FollowUpType::for_status(status)
        .iter()
        .map(|&follow_up_type| {
            Ok(FollowUp {
                job_id: job_id.to_string(),
                due_at: shift(applied_date, follow_up_type.offset())?,
                follow_up_type,
                done: false,
            })
        })
        .collect()
}

/// Open reminders due within `[now, now + 7 days]`, earliest first.
pub fn get_upcoming_follow_ups(follow_ups: &[FollowUp], now: DateTime<Utc>) -> Vec<FollowUp> {
    let horizon = now
        .checked_add_signed(Duration::days(UPCOMING_WINDOW_DAYS))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let mut upcoming: Vec<FollowUp> = follow_ups
        .iter()
        .filter(|f| !f.done && f.due_at >= now && f.due_at <= horizon)
        .cloned()
        .collect();
    upcoming.sort_by_key(|f| f.due_at);
    upcoming
}

pub fn mark_follow_up_done(
    follow_ups: &[FollowUp],
    job_id: &str,
    follow_up_type: FollowUpType,
) -> Vec<FollowUp> {
    follow_ups
        .iter()
        .map(|f| {
            if f.matches(job_id, follow_up_type) {
                FollowUp {
                    done: true,
                    ..f.clone()
                }
            } else {
                f.clone()
            }
        })
        .collect()
}

/// Pushes the matching reminder back by two days. Fails without touching
/// anything if the new due date would leave chrono's representable range.
pub fn snooze_follow_up(
    follow_ups: &[FollowUp],
    job_id: &str,
    follow_up_type: FollowUpType,
) -> Result<Vec<FollowUp>, ScheduleError> {
    follow_ups
        .iter()
        .map(|f| {
            if f.matches(job_id, follow_up_type) {
                Ok(FollowUp {
                    due_at: shift(f.due_at, Duration::days(SNOOZE_DAYS))?,
                    ..f.clone()
                })
            } else {
                Ok(f.clone())
            }
        })
        .collect()
}

/// Human label for a due date relative to `now`.
///
/// Days are `ceil((due_at - now) / 1 day)`, so anything due later today reads
/// "Today" and anything past a whole day reads "Overdue".
pub fn format_follow_up_date(due_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = (due_at - now).num_milliseconds() as f64;
    let days = (millis / Duration::days(1).num_milliseconds() as f64).ceil() as i64;

    match days {
        d if d < 0 => "Overdue".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("In {d} days"),
    }
}

/// Parses an applied date as sent by the client: RFC 3339, a naive
/// `YYYY-MM-DDTHH:MM:SS` (read as UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_applied_date(raw: &str) -> Result<DateTime<Utc>, ScheduleError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(ScheduleError::InvalidDate(raw.to_string()))
}
