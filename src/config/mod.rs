//! Configuration loading and management

mod io;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::achievements::AchievementDefinition;

/// Main configuration structure (`~/.lectio/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Achievement store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// User whose unlocks are read and written
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite database path (defaults to ~/.lectio/achievements.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// JSON file of achievement definitions used instead of the bundled set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<PathBuf>,
}

impl Config {
    /// Resolved database path
    pub fn database_path(&self) -> PathBuf {
        self.store
            .database
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("achievements.db"))
    }

    /// Definitions from the configured JSON file, if one is set
    pub fn load_definitions(&self) -> Result<Option<Vec<AchievementDefinition>>> {
        let Some(path) = &self.store.definitions else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read definitions file: {}", path.display()))?;
        let definitions: Vec<AchievementDefinition> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse definitions file: {}", path.display()))?;
        Ok(Some(definitions))
    }
}
