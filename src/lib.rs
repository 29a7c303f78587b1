//! Lectio - Bible reading plans with pacing and achievements
//!
//! Lectio tracks progress through a reading plan over the whole Bible,
//! tells the reader whether they are ahead of or behind their pace, and
//! unlocks achievements as they read.
//!
//! ## Modules
//!
//! - [`catalog`]: the 66 books, chapter refs and the chronological order
//! - [`plan`]: reading schedules, reading rate and pacing status
//! - [`achievements`]: trigger rules, streaks and the evaluation engine
//! - [`store`]: persistence of definitions and per-user unlocks

pub mod achievements;
pub mod catalog;
pub mod config;
pub mod plan;
pub mod store;

pub use achievements::{AchievementEngine, AchievementError, EvaluationRequest, TriggerContext};
pub use catalog::BibleCatalog;
pub use plan::{PlanStyle, ReadingSchedule, rate, schedule_progress};
pub use store::{AchievementStore, MemoryStore, SqliteStore, StoreError};
