//! Gamification: achievement rules, streaks and the evaluation engine

mod checker;
mod definitions;
mod holidays;
mod manager;
mod streaks;

pub use checker::{RuleContext, TriggerContext, is_satisfied};
pub use definitions::{
    AchievementDefinition, DateRule, TimeWindow, Trigger, TriggerType, TriggerValue,
    UserAchievement, default_definitions, sort_definitions,
};
pub use holidays::{HOLIDAYS, Holiday};
pub use manager::{AchievementEngine, AchievementError, EvaluationOutcome, EvaluationRequest};
pub use streaks::{current_streak, day_string, local_hour, longest_streak, streak};
