//! Achievements command implementation

use anyhow::Result;
use chrono::Local;
use std::collections::HashMap;

use lectio::config::Config;
use lectio::store::AchievementStore;

/// List definitions with unlock markers for the configured user
pub fn achievements_command(config: &Config) -> Result<()> {
    let store = super::open_store(config)?;
    let user_id = &config.settings.user_id;
    let definitions = store.definitions()?;
    let unlocked: HashMap<String, _> = store
        .user_achievements(user_id)?
        .into_iter()
        .filter(|r| r.unlocked)
        .map(|r| (r.achievement_id.clone(), r))
        .collect();

    if definitions.is_empty() {
        println!("No achievements defined.");
        return Ok(());
    }

    println!(
        "Achievements for {} ({}/{} unlocked):\n",
        user_id,
        unlocked.len(),
        definitions.len()
    );

    for def in &definitions {
        let value = def
            .trigger_value
            .as_ref()
            .map(|v| match v.as_text() {
                Some(text) => format!(" {}", text),
                None => format!(" {}", v.as_count().unwrap_or_default()),
            })
            .unwrap_or_default();
        match unlocked.get(&def.id) {
            Some(record) => println!(
                "  [x] {:<22} {}{}  (unlocked {})",
                def.display_name(),
                def.trigger_type.as_str(),
                value,
                record.unlocked_at.with_timezone(&Local).format("%Y-%m-%d")
            ),
            None => println!(
                "  [ ] {:<22} {}{}",
                def.display_name(),
                def.trigger_type.as_str(),
                value
            ),
        }
    }
    Ok(())
}
