//! Read command implementation

use anyhow::{Context, Result};
use chrono::Utc;
use std::path::Path;

use lectio::achievements::{AchievementEngine, EvaluationRequest, TriggerContext};
use lectio::catalog::BibleCatalog;
use lectio::config::Config;
use lectio::plan::PlanStatus;

/// Expand one argument: a chapter ref (`gn-1`), a book (`gn`) or a reading (`"Genesis 1-3"`)
pub fn expand_arg(catalog: &BibleCatalog, arg: &str) -> Result<Vec<String>> {
    if catalog.is_valid_ref(arg) {
        return Ok(vec![arg.to_string()]);
    }
    if catalog.book(arg).is_some() {
        return Ok(catalog.chapters_for_book(arg));
    }
    catalog
        .parse_reading(arg)
        .with_context(|| format!("Not a chapter reference: {}", arg))
}

/// Mark chapters read, save the schedule and evaluate achievements
pub fn read_command(config: &Config, schedule_path: &Path, args: &[String]) -> Result<()> {
    let catalog = BibleCatalog::global();
    let mut schedule = super::load_schedule(schedule_path)?;

    let mut refs = Vec::new();
    for arg in args {
        refs.extend(expand_arg(catalog, arg)?);
    }

    let was_completed = schedule.status == PlanStatus::Completed;
    let flipped = schedule.mark_read(&refs, Utc::now(), catalog);
    if flipped == 0 {
        println!("Nothing new to mark.");
        return Ok(());
    }
    super::save_schedule(schedule_path, &schedule)?;

    println!(
        "Marked {} chapter(s) read ({}/{})",
        flipped,
        schedule.chapters_read_count,
        schedule.plan_length(catalog)
    );

    let engine = AchievementEngine::new(super::open_store(config)?);
    let user_id = &config.settings.user_id;
    super::run_pass(&engine, user_id, EvaluationRequest::progress(&schedule))?;

    if !was_completed && schedule.status == PlanStatus::Completed {
        println!("Plan completed!");
        super::run_pass(
            &engine,
            user_id,
            EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCompleted),
        )?;
    }
    Ok(())
}
