//! CLI command implementations

pub mod achievements;
pub mod books;
pub mod evaluate;
pub mod init;
pub mod read;
pub mod start;
pub mod status;

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use lectio::achievements::{AchievementEngine, EvaluationRequest};
use lectio::config::Config;
use lectio::plan::ReadingSchedule;
use lectio::store::{AchievementStore, SqliteStore};

/// Read a schedule document
pub fn load_schedule(path: &Path) -> Result<ReadingSchedule> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse schedule: {}", path.display()))
}

/// Write a schedule document via a temp file and rename
pub fn save_schedule(path: &Path, schedule: &ReadingSchedule) -> Result<()> {
    let content =
        serde_json::to_string_pretty(schedule).with_context(|| "Failed to serialize schedule")?;
    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write schedule: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to save schedule: {}", path.display()))?;
    Ok(())
}

/// Open the configured store, replacing definitions from the seed file if one is set
pub fn open_store(config: &Config) -> Result<SqliteStore> {
    let path = config.database_path();
    let store = SqliteStore::open(&path)
        .with_context(|| format!("Failed to open achievement store: {}", path.display()))?;

    if let Some(definitions) = config.load_definitions()? {
        store
            .replace_definitions(&definitions)
            .with_context(|| "Failed to load achievement definitions")?;
    }
    Ok(store)
}

/// Run one evaluation pass and print what it unlocked
pub fn run_pass(
    engine: &AchievementEngine<SqliteStore>,
    user_id: &str,
    request: EvaluationRequest<'_>,
) -> Result<()> {
    let outcome = engine.evaluate_pass(user_id, request, &Local::now())?;

    if let Some(definition) = &outcome.announced {
        println!("Achievement unlocked: {}", definition.display_name());
        if let Some(description) = &definition.description {
            println!("  {}", description);
        }
        engine.store().mark_notified(user_id, &definition.id)?;
    }

    let others = outcome.unlocked.len().saturating_sub(1);
    if others > 0 {
        println!("  (+{} more, see `lectio achievements`)", others);
    }
    Ok(())
}
