//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};

use lectio::catalog::BibleCatalog;
use lectio::plan::{PlanStyle, ReadingSchedule};

/// Reader's timezone (UTC-3)
pub fn tz() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("valid offset")
}

/// Local wall-clock instant in the reader's timezone
pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    tz().with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
}

/// A chapters-per-day schedule started at `start`
pub fn new_schedule(chapters: f64, start: DateTime<FixedOffset>) -> ReadingSchedule {
    ReadingSchedule::new(
        PlanStyle::ChaptersPerDay { chapters },
        start.with_timezone(&Utc),
        BibleCatalog::global(),
    )
}

/// Read one Genesis chapter on each of the `days` days ending at `last`
pub fn read_daily(schedule: &mut ReadingSchedule, days: i64, last: DateTime<FixedOffset>) {
    let catalog = BibleCatalog::global();
    let offset = schedule.chapters_read_count as i64;
    for i in 0..days {
        let at = (last - Duration::days(days - 1 - i)).with_timezone(&Utc);
        schedule.mark_read(&[format!("gn-{}", offset + i + 1)], at, catalog);
    }
}
