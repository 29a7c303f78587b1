//! Achievement engine - evaluates definitions and persists unlocks
//!
//! One pass reads `(definitions, unlocked ids)`, checks every definition
//! not yet unlocked, then writes all newly qualifying unlocks in a single
//! batch. Only the first qualifying definition is reported back; the rest
//! are recorded silently.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use super::checker::{RuleContext, TriggerContext, is_satisfied};
use super::definitions::{AchievementDefinition, UserAchievement};
use crate::catalog::BibleCatalog;
use crate::plan::ReadingSchedule;
use crate::store::{AchievementStore, StoreError};

/// Why an evaluation pass was aborted. Nothing is persisted in either case.
#[derive(Debug, thiserror::Error)]
pub enum AchievementError {
    #[error("Achievement definitions unavailable: {0}")]
    DefinitionsUnavailable(#[source] StoreError),

    #[error("Failed to write achievement unlocks: {0}")]
    UnlockWriteFailed(#[source] StoreError),
}

/// What triggered a pass and the state it should look at
#[derive(Debug, Clone, Copy)]
pub struct EvaluationRequest<'a> {
    pub schedule: Option<&'a ReadingSchedule>,
    pub context: TriggerContext,
    pub last_completion: Option<DateTime<Utc>>,
}

impl<'a> EvaluationRequest<'a> {
    pub fn new(schedule: Option<&'a ReadingSchedule>, context: TriggerContext) -> Self {
        Self {
            schedule,
            context,
            last_completion: None,
        }
    }

    /// Progress update using the schedule's latest completion timestamp
    pub fn progress(schedule: &'a ReadingSchedule) -> Self {
        Self {
            schedule: Some(schedule),
            context: TriggerContext::ProgressUpdated,
            last_completion: schedule.read_completion_timestamps.last().copied(),
        }
    }

    pub fn with_last_completion(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.last_completion = at;
        self
    }
}

/// Result of one pass
#[derive(Debug, Clone, Default)]
pub struct EvaluationOutcome {
    /// First newly unlocked definition, in definition order
    pub announced: Option<AchievementDefinition>,
    /// Ids of every unlock persisted by this pass, in definition order
    pub unlocked: Vec<String>,
}

pub struct AchievementEngine<S> {
    store: S,
    catalog: &'static BibleCatalog,
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<S: AchievementStore> AchievementEngine<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            catalog: BibleCatalog::global(),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the user's lock entry once no other pass holds or awaits it
    fn release_user_lock(&self, user_id: &str, lock: Arc<Mutex<()>>) {
        drop(lock);
        let mut locks = self.user_locks.lock().unwrap_or_else(|e| e.into_inner());
        if locks
            .get(user_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(user_id);
        }
    }

    /// Run a pass and return the single definition to announce, if any
    pub fn evaluate<Tz: TimeZone>(
        &self,
        user_id: &str,
        request: EvaluationRequest<'_>,
        now: &DateTime<Tz>,
    ) -> Result<Option<AchievementDefinition>, AchievementError> {
        Ok(self.evaluate_pass(user_id, request, now)?.announced)
    }

    /// Run a pass and report every unlock it persisted.
    ///
    /// Passes for the same user are serialized.
    pub fn evaluate_pass<Tz: TimeZone>(
        &self,
        user_id: &str,
        request: EvaluationRequest<'_>,
        now: &DateTime<Tz>,
    ) -> Result<EvaluationOutcome, AchievementError> {
        let lock = self.user_lock(user_id);
        let result = {
            let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
            self.run_pass(user_id, request, now)
        };
        self.release_user_lock(user_id, lock);
        result
    }

    fn run_pass<Tz: TimeZone>(
        &self,
        user_id: &str,
        request: EvaluationRequest<'_>,
        now: &DateTime<Tz>,
    ) -> Result<EvaluationOutcome, AchievementError> {
        let definitions = self
            .store
            .definitions()
            .map_err(AchievementError::DefinitionsUnavailable)?;
        let unlocked = self
            .store
            .unlocked_ids(user_id)
            .map_err(AchievementError::DefinitionsUnavailable)?;

        let ctx = RuleContext::new(
            request.schedule,
            request.context,
            request.last_completion,
            now,
            self.catalog,
        );

        let mut qualifying: Vec<AchievementDefinition> = Vec::new();
        for definition in definitions {
            if unlocked.contains(&definition.id)
                || qualifying.iter().any(|q| q.id == definition.id)
            {
                continue;
            }
            let Some(trigger) = definition.trigger() else {
                tracing::warn!(
                    "Achievement {} has an unusable trigger ({} {:?})",
                    definition.id,
                    definition.trigger_type.as_str(),
                    definition.trigger_value
                );
                continue;
            };
            if is_satisfied(&trigger, &ctx) {
                tracing::debug!("Achievement {} qualifies on {}", definition.id, request.context);
                qualifying.push(definition);
            }
        }

        if qualifying.is_empty() {
            return Ok(EvaluationOutcome::default());
        }

        let unlocked_at = now.with_timezone(&Utc);
        let records: Vec<UserAchievement> = qualifying
            .iter()
            .map(|d| UserAchievement::unlocked_now(d.id.clone(), unlocked_at))
            .collect();
        self.store
            .write_unlocks(user_id, &records)
            .map_err(AchievementError::UnlockWriteFailed)?;

        let ids: Vec<String> = qualifying.iter().map(|d| d.id.clone()).collect();
        tracing::info!(
            "Unlocked {} achievement(s) for {}: {}",
            ids.len(),
            user_id,
            ids.join(", ")
        );

        Ok(EvaluationOutcome {
            announced: qualifying.into_iter().next(),
            unlocked: ids,
        })
    }
}
