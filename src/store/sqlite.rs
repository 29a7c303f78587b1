//! SQLite-backed achievement store
//!
//! Manages `~/.lectio/achievements.db` (or any given path) with automatic
//! schema migration. Unlock batches run in one transaction and use
//! `INSERT OR IGNORE` on the `(user_id, achievement_id)` primary key.

use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::{AchievementStore, StoreError};
use crate::achievements::{
    AchievementDefinition, TriggerType, TriggerValue, UserAchievement, default_definitions,
};

#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open or create the store at `path`, seeding bundled definitions when empty
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!(
                    "Failed to create store dir {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        Self::init(conn)
    }

    /// Private in-memory database
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        if store.definition_count()? == 0 {
            store.replace_definitions(&default_definitions())?;
        }
        Ok(store)
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;

        let version: i32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |r| r.get(0),
            )
            .unwrap_or(0);

        // Migration 2: definition display text
        if version < 2 {
            let has_title: bool = conn
                .prepare(
                    "SELECT COUNT(*) FROM pragma_table_info('achievement_definitions') WHERE name = 'title'",
                )
                .and_then(|mut s| s.query_row([], |r| r.get::<_, i32>(0)))
                .map(|c| c > 0)
                .unwrap_or(false);

            if !has_title {
                conn.execute_batch(
                    r#"
                    ALTER TABLE achievement_definitions ADD COLUMN title TEXT;
                    ALTER TABLE achievement_definitions ADD COLUMN description TEXT;
                    "#,
                )?;
            }
            conn.execute("INSERT OR REPLACE INTO schema_version VALUES (2)", [])?;
        }

        Ok(())
    }

    fn definition_count(&self) -> Result<i64, StoreError> {
        let conn = self.conn();
        Ok(conn.query_row("SELECT COUNT(*) FROM achievement_definitions", [], |r| {
            r.get(0)
        })?)
    }

    /// Replace the whole definition set atomically
    pub fn replace_definitions(
        &self,
        definitions: &[AchievementDefinition],
    ) -> Result<(), StoreError> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM achievement_definitions", [])?;
        for (position, def) in definitions.iter().enumerate() {
            let value = def
                .trigger_value
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?;
            tx.execute(
                r#"INSERT INTO achievement_definitions
                   (id, trigger_type, trigger_value, category, points, sort_order, position, title, description)
                   VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#,
                params![
                    def.id,
                    def.trigger_type.as_str(),
                    value,
                    def.category,
                    def.points,
                    def.order,
                    position as i64,
                    def.title,
                    def.description,
                ],
            )?;
        }
        tx.commit()?;
        tracing::debug!("Stored {} achievement definitions", definitions.len());
        Ok(())
    }
}

fn parse_timestamp(ms: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| StoreError::Invalid(format!("timestamp out of range: {}", ms)))
}

impl AchievementStore for SqliteStore {
    fn definitions(&self) -> Result<Vec<AchievementDefinition>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            r#"SELECT id, trigger_type, trigger_value, category, points, sort_order, title, description
               FROM achievement_definitions
               ORDER BY sort_order IS NULL, sort_order, position"#,
        )?;
        let rows = stmt.query_map([], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, Option<String>>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, Option<u32>>(4)?,
                r.get::<_, Option<u32>>(5)?,
                r.get::<_, Option<String>>(6)?,
                r.get::<_, Option<String>>(7)?,
            ))
        })?;

        let mut definitions = Vec::new();
        for row in rows {
            let (id, trigger_type, value, category, points, order, title, description) = row?;
            let trigger_type = TriggerType::from_str(&trigger_type).ok_or_else(|| {
                StoreError::Invalid(format!("unknown trigger type {:?} on {}", trigger_type, id))
            })?;
            let trigger_value = value
                .map(|v| serde_json::from_str::<TriggerValue>(&v))
                .transpose()?;
            definitions.push(AchievementDefinition {
                id,
                trigger_type,
                trigger_value,
                category,
                points,
                order,
                title,
                description,
            });
        }
        Ok(definitions)
    }

    fn unlocked_ids(&self, user_id: &str) -> Result<HashSet<String>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT achievement_id FROM user_achievements WHERE user_id = ?1 AND unlocked = 1",
        )?;
        let ids = stmt
            .query_map([user_id], |r| r.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(ids)
    }

    fn write_unlocks(
        &self,
        user_id: &str,
        records: &[UserAchievement],
    ) -> Result<(), StoreError> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        for record in records {
            tx.execute(
                r#"INSERT OR IGNORE INTO user_achievements
                   (user_id, achievement_id, unlocked, unlocked_at, notified)
                   VALUES (?1, ?2, ?3, ?4, ?5)"#,
                params![
                    user_id,
                    record.achievement_id,
                    record.unlocked,
                    record.unlocked_at.timestamp_millis(),
                    record.notified,
                ],
            )?;
        }
        // Dropping `tx` without commit rolls the whole batch back
        tx.commit()?;
        Ok(())
    }

    fn user_achievements(&self, user_id: &str) -> Result<Vec<UserAchievement>, StoreError> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            r#"SELECT achievement_id, unlocked, unlocked_at, notified
               FROM user_achievements WHERE user_id = ?1
               ORDER BY unlocked_at, rowid"#,
        )?;
        let rows = stmt.query_map([user_id], |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, bool>(1)?,
                r.get::<_, i64>(2)?,
                r.get::<_, bool>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (achievement_id, unlocked, unlocked_at, notified) = row?;
            records.push(UserAchievement {
                achievement_id,
                unlocked,
                unlocked_at: parse_timestamp(unlocked_at)?,
                notified,
            });
        }
        Ok(records)
    }

    fn mark_notified(&self, user_id: &str, achievement_id: &str) -> Result<bool, StoreError> {
        let conn = self.conn();
        let exists = conn
            .query_row(
                "SELECT 1 FROM user_achievements WHERE user_id = ?1 AND achievement_id = ?2",
                [user_id, achievement_id],
                |r| r.get::<_, i32>(0),
            )
            .optional()?
            .is_some();
        if exists {
            conn.execute(
                "UPDATE user_achievements SET notified = 1 WHERE user_id = ?1 AND achievement_id = ?2",
                [user_id, achievement_id],
            )?;
        }
        Ok(exists)
    }
}

/// SQL schema for the achievement database
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY
);

-- Reference data, loaded once per evaluation pass
CREATE TABLE IF NOT EXISTS achievement_definitions (
    id TEXT PRIMARY KEY,
    trigger_type TEXT NOT NULL,
    trigger_value TEXT,            -- JSON number or string
    category TEXT NOT NULL,
    points INTEGER,
    sort_order INTEGER,
    position INTEGER NOT NULL      -- insertion order, breaks sort_order ties
);

-- One row per (user, achievement); only `notified` changes after insert
CREATE TABLE IF NOT EXISTS user_achievements (
    user_id TEXT NOT NULL,
    achievement_id TEXT NOT NULL,
    unlocked INTEGER NOT NULL DEFAULT 1,
    unlocked_at INTEGER NOT NULL,  -- unix millis
    notified INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, achievement_id)
);
CREATE INDEX IF NOT EXISTS idx_user_achievements_user ON user_achievements(user_id);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_seeds_defaults_in_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        let defs = store.definitions().unwrap();
        assert_eq!(defs, default_definitions());
    }

    #[test]
    fn test_unordered_definitions_keep_insertion_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        let defs = vec![
            AchievementDefinition::new(
                "s3",
                TriggerType::Streak,
                Some(TriggerValue::Number(3.0)),
                "streak",
            ),
            AchievementDefinition::new(
                "s7",
                TriggerType::Streak,
                Some(TriggerValue::Text("7".to_string())),
                "streak",
            ),
        ];
        store.replace_definitions(&defs).unwrap();
        assert_eq!(store.definitions().unwrap(), defs);
    }

    #[test]
    fn test_unlock_roundtrip_and_idempotence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("achievements.db");
        let store = SqliteStore::open(&path).unwrap();

        let at = DateTime::from_timestamp_millis(1_767_225_600_000).unwrap();
        let batch = vec![
            UserAchievement::unlocked_now("streak_3", at),
            UserAchievement::unlocked_now("streak_7", at),
        ];
        store.write_unlocks("alice", &batch).unwrap();
        store.write_unlocks("alice", &batch[..1]).unwrap();

        // Reopen to read from disk
        drop(store);
        let store = SqliteStore::open(&path).unwrap();
        let ids = store.unlocked_ids("alice").unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("streak_7"));
        assert!(store.unlocked_ids("bob").unwrap().is_empty());

        let records = store.user_achievements("alice").unwrap();
        assert_eq!(records, batch);

        assert!(store.mark_notified("alice", "streak_3").unwrap());
        assert!(!store.mark_notified("alice", "first_plan").unwrap());
        let records = store.user_achievements("alice").unwrap();
        assert!(records[0].notified);
        assert!(!records[1].notified);
    }

    #[test]
    fn test_sub_millisecond_unlock_time_reads_back_equal() {
        let store = SqliteStore::open_in_memory().unwrap();
        let at = DateTime::from_timestamp(1_781_946_000, 123_456_789).unwrap();
        let record = UserAchievement::unlocked_now("first_plan", at);
        store.write_unlocks("alice", &[record.clone()]).unwrap();

        assert_eq!(store.user_achievements("alice").unwrap(), vec![record]);
    }
}
