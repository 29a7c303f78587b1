//! Achievement condition checks
//!
//! Pure predicates over a schedule snapshot and the event that triggered
//! the evaluation. No I/O happens here.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::definitions::{DateRule, Trigger};
use super::holidays::Holiday;
use super::streaks::{local_hour, streak};
use crate::catalog::BibleCatalog;
use crate::plan::{PlanStatus, ReadingSchedule};

/// The event that caused an evaluation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerContext {
    PlanCreated,
    ProgressUpdated,
    PlanCompleted,
    AppLoad,
}

impl TriggerContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlanCreated => "plan_created",
            Self::ProgressUpdated => "progress_updated",
            Self::PlanCompleted => "plan_completed",
            Self::AppLoad => "app_load",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "plan_created" => Some(Self::PlanCreated),
            "progress_updated" => Some(Self::ProgressUpdated),
            "plan_completed" => Some(Self::PlanCompleted),
            "app_load" => Some(Self::AppLoad),
            _ => None,
        }
    }
}

impl std::fmt::Display for TriggerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything a rule may look at during one pass
pub struct RuleContext<'a, Tz: TimeZone> {
    pub schedule: Option<&'a ReadingSchedule>,
    pub trigger: TriggerContext,
    pub last_completion: Option<DateTime<Utc>>,
    pub now: &'a DateTime<Tz>,
    pub catalog: &'a BibleCatalog,
    /// Streak of `schedule`, computed once per pass
    pub streak: u32,
}

impl<'a, Tz: TimeZone> RuleContext<'a, Tz> {
    pub fn new(
        schedule: Option<&'a ReadingSchedule>,
        trigger: TriggerContext,
        last_completion: Option<DateTime<Utc>>,
        now: &'a DateTime<Tz>,
        catalog: &'a BibleCatalog,
    ) -> Self {
        let streak = schedule
            .map(|s| streak(&s.read_completion_timestamps, now))
            .unwrap_or(0);
        Self {
            schedule,
            trigger,
            last_completion,
            now,
            catalog,
            streak,
        }
    }

    /// Completion instant usable by time/date rules, only on progress updates
    fn progress_instant(&self) -> Option<&DateTime<Utc>> {
        if self.trigger == TriggerContext::ProgressUpdated {
            self.last_completion.as_ref()
        } else {
            None
        }
    }
}

/// Check whether `trigger` holds in `ctx`
pub fn is_satisfied<Tz: TimeZone>(trigger: &Trigger, ctx: &RuleContext<'_, Tz>) -> bool {
    match trigger {
        Trigger::PlanStarted => ctx.trigger == TriggerContext::PlanCreated,
        Trigger::ReadTime(window) => ctx
            .progress_instant()
            .is_some_and(|ts| window.hours().contains(&local_hour(ts, &ctx.now.timezone()))),
        Trigger::ReadDate(rule) => ctx.progress_instant().is_some_and(|ts| {
            match (rule, Holiday::on(ts, &ctx.now.timezone())) {
                (_, None) => false,
                (DateRule::AnyHoliday, Some(_)) => true,
                (DateRule::Holiday(wanted), Some(today)) => wanted.id == today.id,
            }
        }),
        Trigger::Custom => false,
        _ => {
            let Some(schedule) = ctx.schedule else {
                return false;
            };
            check_schedule_trigger(trigger, schedule, ctx)
        }
    }
}

fn check_schedule_trigger<Tz: TimeZone>(
    trigger: &Trigger,
    schedule: &ReadingSchedule,
    ctx: &RuleContext<'_, Tz>,
) -> bool {
    match trigger {
        Trigger::Streak(n) => ctx.streak >= *n,
        Trigger::PlanCompleted => {
            matches!(
                ctx.trigger,
                TriggerContext::PlanCompleted | TriggerContext::ProgressUpdated
            ) && schedule.status == PlanStatus::Completed
        }
        Trigger::ChaptersRead(n) => schedule.chapters_read_count >= *n,
        Trigger::BookCompleted(abbrev) => {
            schedule.all_read(&ctx.catalog.chapters_for_book(abbrev))
        }
        Trigger::SectionCompleted(section) => {
            schedule.all_read(&section.chapter_refs(ctx.catalog))
        }
        _ => false,
    }
}
