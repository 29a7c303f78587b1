//! Daily reading streaks
//!
//! A streak counts consecutive local calendar days with at least one
//! recorded completion. It stays alive through "yesterday" so a streak
//! checked before today's reading still shows yesterday's count.

use std::collections::BTreeSet;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Timelike, Utc};

/// Distinct local calendar days of the given instants
fn local_days<Tz: TimeZone>(timestamps: &[DateTime<Utc>], tz: &Tz) -> BTreeSet<NaiveDate> {
    timestamps
        .iter()
        .map(|ts| ts.with_timezone(tz).date_naive())
        .collect()
}

/// Current streak as seen at `now`, in `now`'s timezone.
///
/// Returns 0 when the most recent completion is neither today nor yesterday.
pub fn streak<Tz: TimeZone>(timestamps: &[DateTime<Utc>], now: &DateTime<Tz>) -> u32 {
    let days = local_days(timestamps, &now.timezone());
    let Some(&latest) = days.last() else {
        return 0;
    };

    let today = now.date_naive();
    let Some(yesterday) = today.pred_opt() else {
        return 0;
    };

    let mut cursor = if latest == today {
        today
    } else if latest == yesterday {
        yesterday
    } else {
        return 0;
    };

    let mut count = 0;
    while days.contains(&cursor) {
        count += 1;
        match cursor.pred_opt() {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    count
}

/// Streak in the machine's local timezone
pub fn current_streak(timestamps: &[DateTime<Utc>]) -> u32 {
    streak(timestamps, &Local::now())
}

/// Longest run of consecutive local days ever recorded
pub fn longest_streak<Tz: TimeZone>(timestamps: &[DateTime<Utc>], tz: &Tz) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in local_days(timestamps, tz) {
        run = match previous {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// Local hour (0-23) of an instant in `tz`
pub fn local_hour<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> u32 {
    ts.with_timezone(tz).hour()
}

/// Local date as `YYYY-MM-DD`
pub fn day_string<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%Y-%m-%d").to_string()
}
