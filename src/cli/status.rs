//! Status command implementation

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use lectio::achievements::{current_streak, day_string, longest_streak};
use lectio::catalog::BibleCatalog;
use lectio::plan::{PaceStatus, rate, schedule_progress};

/// Show pacing, streak and progress of a schedule
pub fn status_command(schedule_path: &Path) -> Result<()> {
    let catalog = BibleCatalog::global();
    let schedule = super::load_schedule(schedule_path)?;
    let now = Local::now();

    let progress = schedule_progress(&schedule, &now, catalog);
    let total = schedule.plan_length(catalog);
    let percent = if total > 0 {
        schedule.chapters_read_count as f64 * 100.0 / total as f64
    } else {
        0.0
    };

    println!("Plan {} ({})", schedule.id, schedule.style.as_str());
    println!("  Started:  {}", day_string(&schedule.start_date, &Local));
    println!(
        "  Progress: {}/{} chapters ({:.1}%)",
        schedule.chapters_read_count, total, percent
    );
    println!("  Rate:     {:.2} chapters/day", rate(&schedule.style, catalog));

    match progress.status {
        PaceStatus::Ahead | PaceStatus::Behind => println!(
            "  Pace:     {} ({} day(s), target today {})",
            progress.status.label(),
            progress.days_difference.abs(),
            progress.target_today
        ),
        PaceStatus::OnTrack => println!(
            "  Pace:     {} (target today {})",
            progress.status.label(),
            progress.target_today
        ),
        _ => println!("  Pace:     {}", progress.status.label()),
    }

    let timestamps = &schedule.read_completion_timestamps;
    println!(
        "  Streak:   {} day(s), longest {}",
        current_streak(timestamps),
        longest_streak(timestamps, &Local)
    );
    if let Some(last) = &schedule.last_read_reference {
        println!("  Last read: {}", last);
    }
    Ok(())
}
