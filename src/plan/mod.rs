//! Reading schedules: plan style, stored state and pacing

mod rate;
mod status;

pub use rate::{DAYS_PER_MONTH, DAYS_PER_YEAR, rate};
pub use status::{PaceStatus, ScheduleProgress, schedule_progress};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::BibleCatalog;

/// Pacing strategy of a reading plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "styleType", content = "styleConfig", rename_all = "camelCase")]
pub enum PlanStyle {
    /// Fixed number of chapters per day
    ChaptersPerDay { chapters: f64 },
    /// Whole Bible over a number of months
    TotalDuration {
        #[serde(rename = "durationMonths")]
        months: f64,
    },
    /// Chronological ordering over a number of years
    Chronological {
        #[serde(rename = "durationYears")]
        years: f64,
    },
    /// Fixed chapters per day starting from a chosen book
    Custom {
        chapters: f64,
        #[serde(rename = "startBook", default, skip_serializing_if = "Option::is_none")]
        start_book: Option<String>,
    },
}

impl PlanStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ChaptersPerDay { .. } => "chaptersPerDay",
            Self::TotalDuration { .. } => "totalDuration",
            Self::Chronological { .. } => "chronological",
            Self::Custom { .. } => "custom",
        }
    }
}

/// Status stored on the schedule document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Starting,
    #[default]
    Active,
    Paused,
    Completed,
    Error,
    None,
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::None => "none",
        }
    }
}

impl std::fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of a user's reading plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSchedule {
    pub id: String,
    pub style: PlanStyle,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub status: PlanStatus,
    pub total_chapters_in_bible: u32,
    /// Number of `true` entries in `completed_chapters_map`
    #[serde(default)]
    pub chapters_read_count: u32,
    #[serde(default)]
    pub completed_chapters_map: BTreeMap<String, bool>,
    #[serde(default)]
    pub last_read_reference: Option<String>,
    /// One instant per mark-read event, oldest first
    #[serde(default)]
    pub read_completion_timestamps: Vec<DateTime<Utc>>,
}

impl ReadingSchedule {
    /// Start a new active plan
    pub fn new(style: PlanStyle, start_date: DateTime<Utc>, catalog: &BibleCatalog) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            style,
            start_date,
            status: PlanStatus::Active,
            total_chapters_in_bible: catalog.total_chapters(),
            chapters_read_count: 0,
            completed_chapters_map: BTreeMap::new(),
            last_read_reference: None,
            read_completion_timestamps: Vec::new(),
        }
    }

    /// Number of chapters that completes this plan
    pub fn plan_length(&self, catalog: &BibleCatalog) -> u32 {
        match self.style {
            PlanStyle::Chronological { .. } => catalog.chronological_chapter_order().len() as u32,
            _ => catalog.total_chapters(),
        }
    }

    pub fn is_read(&self, chapter_ref: &str) -> bool {
        self.completed_chapters_map
            .get(chapter_ref)
            .copied()
            .unwrap_or(false)
    }

    /// True when every ref in `refs` is marked read. An empty list is never complete.
    pub fn all_read<S: AsRef<str>>(&self, refs: &[S]) -> bool {
        !refs.is_empty() && refs.iter().all(|r| self.is_read(r.as_ref()))
    }

    /// Mark chapters read at `at`. Returns how many refs were newly flipped.
    ///
    /// Unknown refs and refs already read are ignored. A completion
    /// timestamp is appended only when something was flipped.
    pub fn mark_read<S: AsRef<str>>(
        &mut self,
        refs: &[S],
        at: DateTime<Utc>,
        catalog: &BibleCatalog,
    ) -> u32 {
        let mut flipped = 0;
        for chapter_ref in refs {
            let chapter_ref = chapter_ref.as_ref();
            if !catalog.is_valid_ref(chapter_ref) {
                tracing::warn!("Ignoring unknown chapter ref: {}", chapter_ref);
                continue;
            }
            if self.is_read(chapter_ref) {
                continue;
            }
            self.completed_chapters_map
                .insert(chapter_ref.to_string(), true);
            self.last_read_reference = Some(chapter_ref.to_string());
            flipped += 1;
        }

        if flipped > 0 {
            self.chapters_read_count += flipped;
            self.read_completion_timestamps.push(at);
            if self.chapters_read_count >= self.plan_length(catalog) {
                self.status = PlanStatus::Completed;
            } else if self.status == PlanStatus::Starting {
                self.status = PlanStatus::Active;
            }
        }

        flipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_style_serde_shape() {
        let style = PlanStyle::TotalDuration { months: 12.0 };
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["styleType"], "totalDuration");
        assert_eq!(json["styleConfig"]["durationMonths"], 12.0);

        let parsed: PlanStyle = serde_json::from_str(
            r#"{"styleType":"custom","styleConfig":{"chapters":2,"startBook":"mt"}}"#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            PlanStyle::Custom {
                chapters: 2.0,
                start_book: Some("mt".to_string())
            }
        );
    }

    #[test]
    fn test_mark_read_keeps_count_consistent() {
        let catalog = BibleCatalog::global();
        let mut schedule =
            ReadingSchedule::new(PlanStyle::ChaptersPerDay { chapters: 3.0 }, start(), catalog);

        let flipped = schedule.mark_read(&["gn-1", "gn-2", "gn-2", "zz-1"], start(), catalog);
        assert_eq!(flipped, 2);
        assert_eq!(schedule.chapters_read_count, 2);
        assert_eq!(schedule.read_completion_timestamps.len(), 1);
        assert_eq!(schedule.last_read_reference.as_deref(), Some("gn-2"));

        // Re-reading does not append a timestamp
        assert_eq!(schedule.mark_read(&["gn-1"], start(), catalog), 0);
        assert_eq!(schedule.read_completion_timestamps.len(), 1);

        let trues = schedule.completed_chapters_map.values().filter(|v| **v).count();
        assert_eq!(trues as u32, schedule.chapters_read_count);
    }

    #[test]
    fn test_mark_read_completes_plan() {
        let catalog = BibleCatalog::global();
        let mut schedule =
            ReadingSchedule::new(PlanStyle::Chronological { years: 1.0 }, start(), catalog);
        let all: Vec<String> = catalog.chronological_chapter_order().to_vec();

        schedule.mark_read(&all[..all.len() - 1], start(), catalog);
        assert_eq!(schedule.status, PlanStatus::Active);

        schedule.mark_read(&all[all.len() - 1..], start(), catalog);
        assert_eq!(schedule.status, PlanStatus::Completed);
        assert_eq!(schedule.chapters_read_count, 1189);
    }

    #[test]
    fn test_all_read_empty_is_false() {
        let catalog = BibleCatalog::global();
        let schedule =
            ReadingSchedule::new(PlanStyle::ChaptersPerDay { chapters: 1.0 }, start(), catalog);
        let empty: [&str; 0] = [];
        assert!(!schedule.all_read(&empty));
    }
}
