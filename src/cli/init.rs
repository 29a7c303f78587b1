//! Init command implementation

use anyhow::{Result, bail};
use std::path::Path;
use tracing::info;

use lectio::config::Config;
use lectio::store::AchievementStore;

/// Write a default config file and create the achievement store
pub fn init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    config.save_to_file(config_path)?;
    info!("Wrote config to {}", config_path.display());

    let store = super::open_store(&config)?;
    let count = store.definitions()?.len();

    println!("Created {}", config_path.display());
    println!(
        "Achievement store: {} ({} definitions)",
        config.database_path().display(),
        count
    );
    Ok(())
}
