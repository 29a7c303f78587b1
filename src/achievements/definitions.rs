//! Achievement definitions and unlock records
//!
//! Definitions are reference data owned by the store. Each carries a raw
//! `(trigger_type, trigger_value)` pair which [`AchievementDefinition::trigger`]
//! interprets into a typed [`Trigger`].

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::holidays::Holiday;
use crate::catalog::Section;

/// Kind of condition that unlocks an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Streak,
    PlanStarted,
    PlanCompleted,
    ChaptersRead,
    BookCompleted,
    SectionCompleted,
    ReadTime,
    ReadDate,
    Custom,
}

impl TriggerType {
    /// Get the string ID for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streak => "streak",
            Self::PlanStarted => "plan_started",
            Self::PlanCompleted => "plan_completed",
            Self::ChaptersRead => "chapters_read",
            Self::BookCompleted => "book_completed",
            Self::SectionCompleted => "section_completed",
            Self::ReadTime => "read_time",
            Self::ReadDate => "read_date",
            Self::Custom => "custom",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "streak" => Some(Self::Streak),
            "plan_started" => Some(Self::PlanStarted),
            "plan_completed" => Some(Self::PlanCompleted),
            "chapters_read" => Some(Self::ChaptersRead),
            "book_completed" => Some(Self::BookCompleted),
            "section_completed" => Some(Self::SectionCompleted),
            "read_time" => Some(Self::ReadTime),
            "read_date" => Some(Self::ReadDate),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Polymorphic trigger parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TriggerValue {
    Number(f64),
    Text(String),
}

impl TriggerValue {
    /// Interpret as a non-negative count; numeric strings are accepted
    pub fn as_count(&self) -> Option<u32> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if n.is_finite() && n >= 0.0 && n <= u32::MAX as f64 {
            Some(n.ceil() as u32)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            Self::Number(_) => None,
        }
    }
}

/// Local time-of-day windows for `read_time` achievements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// 00:00 to 04:00
    LateNight,
    /// 04:00 to 06:00
    EarlyMorning,
}

impl TimeWindow {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "late_night" => Some(Self::LateNight),
            "early_morning" => Some(Self::EarlyMorning),
            _ => None,
        }
    }

    /// Half-open hour range `[start, end)`
    pub fn hours(&self) -> std::ops::Range<u32> {
        match self {
            Self::LateNight => 0..4,
            Self::EarlyMorning => 4..6,
        }
    }
}

/// Which dates satisfy a `read_date` achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    AnyHoliday,
    Holiday(&'static Holiday),
}

/// Typed interpretation of a definition's trigger
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Streak(u32),
    PlanStarted,
    PlanCompleted,
    ChaptersRead(u32),
    BookCompleted(String),
    SectionCompleted(Section),
    ReadTime(TimeWindow),
    ReadDate(DateRule),
    Custom,
}

/// Immutable achievement reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDefinition {
    pub id: String,
    pub trigger_type: TriggerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_value: Option<TriggerValue>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AchievementDefinition {
    pub fn new(
        id: impl Into<String>,
        trigger_type: TriggerType,
        trigger_value: Option<TriggerValue>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trigger_type,
            trigger_value,
            category: category.into(),
            points: None,
            order: None,
            title: None,
            description: None,
        }
    }

    /// Display name, falling back to the id
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// Interpret the raw trigger pair. `None` means the definition can never qualify.
    pub fn trigger(&self) -> Option<Trigger> {
        let value = self.trigger_value.as_ref();
        match self.trigger_type {
            TriggerType::Streak => value?.as_count().map(Trigger::Streak),
            TriggerType::PlanStarted => Some(Trigger::PlanStarted),
            TriggerType::PlanCompleted => Some(Trigger::PlanCompleted),
            TriggerType::ChaptersRead => value?.as_count().map(Trigger::ChaptersRead),
            TriggerType::BookCompleted => value?
                .as_text()
                .map(|abbrev| Trigger::BookCompleted(abbrev.trim().to_lowercase())),
            TriggerType::SectionCompleted => value?
                .as_text()
                .and_then(Section::from_str)
                .map(Trigger::SectionCompleted),
            TriggerType::ReadTime => value?
                .as_text()
                .and_then(TimeWindow::from_str)
                .map(Trigger::ReadTime),
            TriggerType::ReadDate => {
                let key = value?.as_text()?.trim().to_lowercase();
                if key == "holiday" {
                    Some(Trigger::ReadDate(DateRule::AnyHoliday))
                } else {
                    Holiday::find(&key).map(|h| Trigger::ReadDate(DateRule::Holiday(h)))
                }
            }
            TriggerType::Custom => Some(Trigger::Custom),
        }
    }
}

/// Order definitions by `order`; unordered definitions keep their relative
/// position after all ordered ones.
pub fn sort_definitions(definitions: &mut [AchievementDefinition]) {
    definitions.sort_by_key(|d| d.order.unwrap_or(u32::MAX));
}

/// Per-user unlock record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub achievement_id: String,
    pub unlocked: bool,
    pub unlocked_at: DateTime<Utc>,
    pub notified: bool,
}

impl UserAchievement {
    /// A fresh, not yet announced unlock. `at` is kept to millisecond precision.
    pub fn unlocked_now(achievement_id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            achievement_id: achievement_id.into(),
            unlocked: true,
            unlocked_at: at.trunc_subsecs(3),
            notified: false,
        }
    }
}

enum BuiltinValue {
    Count(u32),
    Key(&'static str),
}

struct Builtin {
    id: &'static str,
    trigger_type: TriggerType,
    value: Option<BuiltinValue>,
    category: &'static str,
    points: u32,
    title: &'static str,
    description: &'static str,
}

/// Bundled achievement set used to seed an empty store
static BUILTIN: &[Builtin] = &[
    // === PLAN ===
    Builtin {
        id: "first_plan",
        trigger_type: TriggerType::PlanStarted,
        value: None,
        category: "plan",
        points: 10,
        title: "First Steps",
        description: "Start a reading plan",
    },
    Builtin {
        id: "plan_finisher",
        trigger_type: TriggerType::PlanCompleted,
        value: None,
        category: "plan",
        points: 500,
        title: "Finisher",
        description: "Complete a reading plan",
    },
    // === STREAK ===
    Builtin {
        id: "streak_3",
        trigger_type: TriggerType::Streak,
        value: Some(BuiltinValue::Count(3)),
        category: "streak",
        points: 30,
        title: "On Fire",
        description: "Read three days in a row",
    },
    Builtin {
        id: "streak_7",
        trigger_type: TriggerType::Streak,
        value: Some(BuiltinValue::Count(7)),
        category: "streak",
        points: 75,
        title: "Week Warrior",
        description: "Read seven days in a row",
    },
    Builtin {
        id: "streak_30",
        trigger_type: TriggerType::Streak,
        value: Some(BuiltinValue::Count(30)),
        category: "streak",
        points: 300,
        title: "Monthly Master",
        description: "Read thirty days in a row",
    },
    // === MILESTONE ===
    Builtin {
        id: "chapters_1",
        trigger_type: TriggerType::ChaptersRead,
        value: Some(BuiltinValue::Count(1)),
        category: "milestone",
        points: 5,
        title: "In the Beginning",
        description: "Read your first chapter",
    },
    Builtin {
        id: "chapters_100",
        trigger_type: TriggerType::ChaptersRead,
        value: Some(BuiltinValue::Count(100)),
        category: "milestone",
        points: 100,
        title: "Century",
        description: "Read 100 chapters",
    },
    Builtin {
        id: "chapters_500",
        trigger_type: TriggerType::ChaptersRead,
        value: Some(BuiltinValue::Count(500)),
        category: "milestone",
        points: 250,
        title: "Halfway There",
        description: "Read 500 chapters",
    },
    // === BOOK ===
    Builtin {
        id: "book_genesis",
        trigger_type: TriggerType::BookCompleted,
        value: Some(BuiltinValue::Key("gn")),
        category: "book",
        points: 50,
        title: "Origins",
        description: "Finish Genesis",
    },
    Builtin {
        id: "book_psalms",
        trigger_type: TriggerType::BookCompleted,
        value: Some(BuiltinValue::Key("sl")),
        category: "book",
        points: 100,
        title: "Songbook",
        description: "Finish Psalms",
    },
    // === SECTION ===
    Builtin {
        id: "section_pentateuch",
        trigger_type: TriggerType::SectionCompleted,
        value: Some(BuiltinValue::Key("pentateuch")),
        category: "section",
        points: 150,
        title: "Torah",
        description: "Finish the five books of Moses",
    },
    Builtin {
        id: "section_gospels",
        trigger_type: TriggerType::SectionCompleted,
        value: Some(BuiltinValue::Key("gospels")),
        category: "section",
        points: 150,
        title: "Good News",
        description: "Finish the four Gospels",
    },
    Builtin {
        id: "section_ot",
        trigger_type: TriggerType::SectionCompleted,
        value: Some(BuiltinValue::Key("old_testament")),
        category: "section",
        points: 400,
        title: "Old Covenant",
        description: "Finish the Old Testament",
    },
    Builtin {
        id: "section_nt",
        trigger_type: TriggerType::SectionCompleted,
        value: Some(BuiltinValue::Key("new_testament")),
        category: "section",
        points: 300,
        title: "New Covenant",
        description: "Finish the New Testament",
    },
    // === TIME ===
    Builtin {
        id: "night_owl",
        trigger_type: TriggerType::ReadTime,
        value: Some(BuiltinValue::Key("late_night")),
        category: "time",
        points: 15,
        title: "Night Watch",
        description: "Read between midnight and 4 AM",
    },
    Builtin {
        id: "early_bird",
        trigger_type: TriggerType::ReadTime,
        value: Some(BuiltinValue::Key("early_morning")),
        category: "time",
        points: 15,
        title: "Early Bird",
        description: "Read between 4 AM and 6 AM",
    },
    Builtin {
        id: "holiday_reader",
        trigger_type: TriggerType::ReadDate,
        value: Some(BuiltinValue::Key("holiday")),
        category: "time",
        points: 20,
        title: "Feast Day",
        description: "Read on a holiday",
    },
];

/// The bundled achievement set, in definition order
pub fn default_definitions() -> Vec<AchievementDefinition> {
    BUILTIN
        .iter()
        .enumerate()
        .map(|(idx, b)| AchievementDefinition {
            id: b.id.to_string(),
            trigger_type: b.trigger_type,
            trigger_value: b.value.as_ref().map(|v| match v {
                BuiltinValue::Count(n) => TriggerValue::Number(*n as f64),
                BuiltinValue::Key(k) => TriggerValue::Text(k.to_string()),
            }),
            category: b.category.to_string(),
            points: Some(b.points),
            order: Some(idx as u32 + 1),
            title: Some(b.title.to_string()),
            description: Some(b.description.to_string()),
        })
        .collect()
}
