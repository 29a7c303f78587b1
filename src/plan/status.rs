//! Pacing status of a schedule against its expected rate

use chrono::{DateTime, TimeZone};
use serde::Serialize;

use super::{PlanStatus, ReadingSchedule, rate};
use crate::catalog::BibleCatalog;

/// Fraction of a day's rate tolerated before reporting ahead/behind
const ON_TRACK_TOLERANCE: f64 = 0.1;

/// Derived pacing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    Starting,
    Ahead,
    Behind,
    OnTrack,
    Completed,
    Paused,
    Error,
}

impl PaceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Ahead => "ahead",
            Self::Behind => "behind",
            Self::OnTrack => "on_track",
            Self::Completed => "completed",
            Self::Paused => "paused",
            Self::Error => "error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Starting => "Starting",
            Self::Ahead => "Ahead of schedule",
            Self::Behind => "Behind schedule",
            Self::OnTrack => "On track",
            Self::Completed => "Completed",
            Self::Paused => "Paused",
            Self::Error => "Plan needs attention",
        }
    }
}

impl std::fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a pacing check
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleProgress {
    pub status: PaceStatus,
    /// Days ahead (positive) or behind (negative); 0 when on track
    pub days_difference: i64,
    /// Chapters expected by the end of today; 0 when not computed
    pub target_today: u32,
}

impl ScheduleProgress {
    fn terminal(status: PaceStatus) -> Self {
        Self {
            status,
            days_difference: 0,
            target_today: 0,
        }
    }
}

/// Compute pacing for `schedule` as seen at `now` in `now`'s timezone.
///
/// The start day counts as day 1. Completed and paused plans short-circuit.
pub fn schedule_progress<Tz: TimeZone>(
    schedule: &ReadingSchedule,
    now: &DateTime<Tz>,
    catalog: &BibleCatalog,
) -> ScheduleProgress {
    match schedule.status {
        PlanStatus::Completed => return ScheduleProgress::terminal(PaceStatus::Completed),
        PlanStatus::Paused => return ScheduleProgress::terminal(PaceStatus::Paused),
        _ => {}
    }

    let start_day = schedule
        .start_date
        .with_timezone(&now.timezone())
        .date_naive();
    let elapsed_days = ((now.date_naive() - start_day).num_days() + 1).max(0);
    if elapsed_days <= 0 {
        return ScheduleProgress::terminal(PaceStatus::Starting);
    }

    let rate = rate(&schedule.style, catalog);
    if rate <= 0.0 {
        tracing::debug!("Schedule {} has no usable rate", schedule.id);
        return ScheduleProgress::terminal(PaceStatus::Error);
    }

    let target_today = (rate * elapsed_days as f64).ceil();
    let diff = schedule.chapters_read_count as f64 - target_today;
    let threshold = rate * ON_TRACK_TOLERANCE;

    let (status, days_difference) = if diff > threshold {
        (PaceStatus::Ahead, (diff / rate).round() as i64)
    } else if diff < -threshold {
        (PaceStatus::Behind, (diff / rate).round() as i64)
    } else {
        (PaceStatus::OnTrack, 0)
    };

    ScheduleProgress {
        status,
        days_difference,
        target_today: target_today as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanStyle;
    use chrono::{FixedOffset, Utc};

    fn tz() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn schedule(style: PlanStyle, read: u32) -> ReadingSchedule {
        let catalog = BibleCatalog::global();
        let start = tz()
            .with_ymd_and_hms(2026, 3, 1, 22, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        let mut s = ReadingSchedule::new(style, start, catalog);
        s.chapters_read_count = read;
        s
    }

    fn at(day: u32, hour: u32) -> DateTime<FixedOffset> {
        tz().with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_start_day_counts_as_day_one() {
        let s = schedule(PlanStyle::ChaptersPerDay { chapters: 3.0 }, 3);
        let p = schedule_progress(&s, &at(1, 23), BibleCatalog::global());
        assert_eq!(p.target_today, 3);
        assert_eq!(p.status, PaceStatus::OnTrack);
        assert_eq!(p.days_difference, 0);
    }

    #[test]
    fn test_local_calendar_days_not_utc() {
        // Started 22:00 on the 1st at UTC-3, which is already the 2nd in UTC
        let s = schedule(PlanStyle::ChaptersPerDay { chapters: 1.0 }, 0);
        let p = schedule_progress(&s, &at(2, 8), BibleCatalog::global());
        assert_eq!(p.target_today, 2);
    }

    #[test]
    fn test_before_start_is_starting() {
        let s = schedule(PlanStyle::ChaptersPerDay { chapters: 3.0 }, 0);
        let now = tz().with_ymd_and_hms(2026, 2, 27, 12, 0, 0).unwrap();
        let p = schedule_progress(&s, &now, BibleCatalog::global());
        assert_eq!(p.status, PaceStatus::Starting);
    }

    #[test]
    fn test_ahead_and_behind() {
        let catalog = BibleCatalog::global();
        // Day 5 at 2/day => target 10
        let ahead = schedule(PlanStyle::ChaptersPerDay { chapters: 2.0 }, 16);
        let p = schedule_progress(&ahead, &at(5, 9), catalog);
        assert_eq!(p.status, PaceStatus::Ahead);
        assert_eq!(p.target_today, 10);
        assert_eq!(p.days_difference, 3);

        let behind = schedule(PlanStyle::ChaptersPerDay { chapters: 2.0 }, 3);
        let p = schedule_progress(&behind, &at(5, 9), catalog);
        assert_eq!(p.status, PaceStatus::Behind);
        assert_eq!(p.days_difference, -4);
    }

    #[test]
    fn test_tolerance_suppresses_rounding_noise() {
        // Day 1 at 3.26/day => target ceil(3.26) = 4; reading 4 is on track,
        // reading 3 is one chapter (> 0.326) behind.
        let catalog = BibleCatalog::global();
        let on = schedule(PlanStyle::Chronological { years: 1.0 }, 4);
        assert_eq!(schedule_progress(&on, &at(1, 23), catalog).status, PaceStatus::OnTrack);

        let off = schedule(PlanStyle::Chronological { years: 1.0 }, 3);
        let p = schedule_progress(&off, &at(1, 23), catalog);
        assert_eq!(p.status, PaceStatus::Behind);
        assert_eq!(p.days_difference, 0);
    }

    #[test]
    fn test_terminal_states_short_circuit() {
        let catalog = BibleCatalog::global();
        let mut s = schedule(PlanStyle::TotalDuration { months: 0.0 }, 0);
        s.status = PlanStatus::Paused;
        assert_eq!(schedule_progress(&s, &at(9, 9), catalog).status, PaceStatus::Paused);
        s.status = PlanStatus::Completed;
        assert_eq!(schedule_progress(&s, &at(9, 9), catalog).status, PaceStatus::Completed);
    }

    #[test]
    fn test_zero_rate_is_error() {
        let s = schedule(PlanStyle::TotalDuration { months: 0.0 }, 0);
        let p = schedule_progress(&s, &at(9, 9), BibleCatalog::global());
        assert_eq!(p.status, PaceStatus::Error);
    }

    #[test]
    fn test_deterministic() {
        let catalog = BibleCatalog::global();
        let s = schedule(PlanStyle::TotalDuration { months: 6.0 }, 40);
        let a = schedule_progress(&s, &at(12, 7), catalog);
        let b = schedule_progress(&s, &at(12, 7), catalog);
        assert_eq!(a, b);
    }
}
