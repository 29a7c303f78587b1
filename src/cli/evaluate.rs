//! Evaluate command implementation

use anyhow::{Result, bail};
use std::path::Path;

use lectio::achievements::{AchievementEngine, EvaluationRequest, TriggerContext};
use lectio::config::Config;

/// Run one evaluation pass against an optional schedule
pub fn evaluate_command(
    config: &Config,
    schedule_path: Option<&Path>,
    context: Option<String>,
) -> Result<()> {
    let context = match context {
        Some(name) => match TriggerContext::from_str(&name) {
            Some(ctx) => ctx,
            None => bail!(
                "Unknown context: {} (expected plan_created, progress_updated, plan_completed or app_load)",
                name
            ),
        },
        None => TriggerContext::AppLoad,
    };

    let schedule = schedule_path.map(super::load_schedule).transpose()?;
    let last_completion = schedule
        .as_ref()
        .and_then(|s| s.read_completion_timestamps.last().copied());
    let request =
        EvaluationRequest::new(schedule.as_ref(), context).with_last_completion(last_completion);

    let engine = AchievementEngine::new(super::open_store(config)?);
    super::run_pass(&engine, &config.settings.user_id, request)
}
