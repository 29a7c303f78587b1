//! Start command implementation

use anyhow::{Result, bail};
use chrono::Utc;
use std::path::Path;

use lectio::achievements::{AchievementEngine, EvaluationRequest, TriggerContext};
use lectio::catalog::BibleCatalog;
use lectio::config::Config;
use lectio::plan::{PlanStyle, ReadingSchedule, rate};

/// Pacing options from the command line; exactly one must be set
#[derive(Debug, Default)]
pub struct StyleArgs {
    pub chapters: Option<f64>,
    pub months: Option<f64>,
    pub years: Option<f64>,
    pub custom: Option<f64>,
    pub start_book: Option<String>,
}

impl StyleArgs {
    pub fn into_style(self, catalog: &BibleCatalog) -> Result<PlanStyle> {
        let style = match (self.chapters, self.months, self.years, self.custom) {
            (Some(chapters), None, None, None) => PlanStyle::ChaptersPerDay { chapters },
            (None, Some(months), None, None) => PlanStyle::TotalDuration { months },
            (None, None, Some(years), None) => PlanStyle::Chronological { years },
            (None, None, None, Some(chapters)) => {
                if let Some(book) = &self.start_book
                    && catalog.book(book).is_none()
                {
                    bail!("Unknown book: {}", book);
                }
                PlanStyle::Custom {
                    chapters,
                    start_book: self.start_book,
                }
            }
            _ => bail!("Choose exactly one of --chapters, --months, --years or --custom"),
        };
        Ok(style)
    }
}

/// Create a schedule file and evaluate `plan_created`
pub fn start_command(config: &Config, out: &Path, force: bool, args: StyleArgs) -> Result<()> {
    if out.exists() && !force {
        bail!(
            "Schedule already exists at {}. Use --force to overwrite.",
            out.display()
        );
    }

    let catalog = BibleCatalog::global();
    let style = args.into_style(catalog)?;
    let schedule = ReadingSchedule::new(style, Utc::now(), catalog);
    super::save_schedule(out, &schedule)?;

    println!("Started {} plan {}", schedule.style.as_str(), schedule.id);
    println!(
        "  {:.2} chapters/day over {} chapters",
        rate(&schedule.style, catalog),
        schedule.plan_length(catalog)
    );

    let engine = AchievementEngine::new(super::open_store(config)?);
    super::run_pass(
        &engine,
        &config.settings.user_id,
        EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCreated),
    )
}
