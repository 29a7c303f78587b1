//! Achievement document store
//!
//! The engine reads definitions and unlocked ids, then writes all new
//! unlocks for a pass in one atomic batch. Implementations must make that
//! batch all-or-nothing and should ignore records already present for the
//! same `(user_id, achievement_id)` so racing passes stay harmless.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::collections::HashSet;
use std::sync::Arc;

use crate::achievements::{AchievementDefinition, UserAchievement};

/// Error type for store implementations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid stored data: {0}")]
    Invalid(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub trait AchievementStore {
    /// All definitions, in definition order
    fn definitions(&self) -> Result<Vec<AchievementDefinition>, StoreError>;

    fn unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>, StoreError>;

    /// Persist every record or none of them
    fn write_unlocks(&self, user_id: &str, records: &[UserAchievement])
    -> Result<(), StoreError>;

    /// Unlock records for a user, oldest first
    fn user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>, StoreError>;

    /// Flag an unlock as announced. Returns false when no such unlock exists.
    fn mark_notified(&self, user_id: &str, achievement_id: &str) -> Result<bool, StoreError>;
}

impl<T: AchievementStore + ?Sized> AchievementStore for Arc<T> {
    fn definitions(&self) -> Result<Vec<AchievementDefinition>, StoreError> {
        (**self).definitions()
    }

    fn unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>, StoreError> {
        (**self).unlocked_ids(user_id)
    }

    fn write_unlocks(
        &self,
        user_id: &str,
        records: &[UserAchievement],
    ) -> Result<(), StoreError> {
        (**self).write_unlocks(user_id, records)
    }

    fn user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>, StoreError> {
        (**self).user_achievements(user_id)
    }

    fn mark_notified(&self, user_id: &str, achievement_id: &str) -> Result<bool, StoreError> {
        (**self).mark_notified(user_id, achievement_id)
    }
}
