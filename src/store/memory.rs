//! In-process store

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::{AchievementStore, StoreError};
use crate::achievements::{AchievementDefinition, UserAchievement, sort_definitions};

/// Keeps definitions and unlocks in memory; a batch is applied under one lock
#[derive(Debug, Default)]
pub struct MemoryStore {
    definitions: Vec<AchievementDefinition>,
    unlocks: Mutex<HashMap<String, Vec<UserAchievement>>>,
}

impl MemoryStore {
    pub fn new(mut definitions: Vec<AchievementDefinition>) -> Self {
        sort_definitions(&mut definitions);
        Self {
            definitions,
            unlocks: Mutex::new(HashMap::new()),
        }
    }

    /// Store seeded with the bundled achievement set
    pub fn with_defaults() -> Self {
        Self::new(crate::achievements::default_definitions())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<UserAchievement>>> {
        self.unlocks.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl AchievementStore for MemoryStore {
    fn definitions(&self) -> Result<Vec<AchievementDefinition>, StoreError> {
        Ok(self.definitions.clone())
    }

    fn unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>, StoreError> {
        Ok(self
            .lock()
            .get(user_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.unlocked)
                    .map(|r| r.achievement_id.clone())
                    .collect()
            })
            .unwrap_or_default())
    }

    fn write_unlocks(
        &self,
        user_id: &str,
        records: &[UserAchievement],
    ) -> Result<(), StoreError> {
        let mut guard = self.lock();
        let existing = guard.entry(user_id.to_string()).or_default();
        for record in records {
            if !existing
                .iter()
                .any(|r| r.achievement_id == record.achievement_id)
            {
                existing.push(record.clone());
            }
        }
        Ok(())
    }

    fn user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>, StoreError> {
        Ok(self.lock().get(user_id).cloned().unwrap_or_default())
    }

    fn mark_notified(&self, user_id: &str, achievement_id: &str) -> Result<bool, StoreError> {
        let mut guard = self.lock();
        let record = guard
            .get_mut(user_id)
            .and_then(|records| records.iter_mut().find(|r| r.achievement_id == achievement_id));
        match record {
            Some(r) => {
                r.notified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
