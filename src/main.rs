use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lectio::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "lectio")]
#[command(about = "Bible reading plans with pacing, streaks and achievements")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.lectio/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file and create the achievement store
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start a new reading plan
    Start {
        /// Where to write the schedule JSON
        #[arg(long)]
        out: PathBuf,

        /// Overwrite an existing schedule file
        #[arg(long)]
        force: bool,

        /// Fixed chapters per day
        #[arg(long, value_name = "N")]
        chapters: Option<f64>,

        /// Whole Bible over N months
        #[arg(long, value_name = "N")]
        months: Option<f64>,

        /// Chronological order over N years
        #[arg(long, value_name = "N")]
        years: Option<f64>,

        /// Fixed chapters per day from a chosen book
        #[arg(long, value_name = "N")]
        custom: Option<f64>,

        /// Starting book for --custom (abbreviation, e.g. "mt")
        #[arg(long, value_name = "ABBR", requires = "custom")]
        start_book: Option<String>,
    },

    /// Mark chapters read (e.g. `gn-1`, `ob`, "Genesis 1-3")
    Read {
        #[arg(long)]
        schedule: PathBuf,

        #[arg(required = true)]
        refs: Vec<String>,
    },

    /// Show pacing, streak and progress of a schedule
    Status {
        #[arg(long)]
        schedule: PathBuf,
    },

    /// Run an achievement evaluation pass
    Evaluate {
        #[arg(long)]
        schedule: Option<PathBuf>,

        /// plan_created, progress_updated, plan_completed or app_load (default)
        #[arg(long)]
        context: Option<String>,
    },

    /// List the books of the catalog
    Books {
        /// Only this section (pentateuch, gospels, ot, nt)
        #[arg(long)]
        section: Option<String>,
    },

    /// List achievements and which are unlocked
    Achievements,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::global_config_path);

    match cli.command {
        Commands::Init { force } => {
            cli::init::init_command(&config_path, force)?;
        }
        Commands::Start {
            out,
            force,
            chapters,
            months,
            years,
            custom,
            start_book,
        } => {
            let config = Config::load(Some(config_path.as_path()))?;
            let args = cli::start::StyleArgs {
                chapters,
                months,
                years,
                custom,
                start_book,
            };
            cli::start::start_command(&config, &out, force, args)?;
        }
        Commands::Read { schedule, refs } => {
            let config = Config::load(Some(config_path.as_path()))?;
            cli::read::read_command(&config, &schedule, &refs)?;
        }
        Commands::Status { schedule } => {
            cli::status::status_command(&schedule)?;
        }
        Commands::Evaluate { schedule, context } => {
            let config = Config::load(Some(config_path.as_path()))?;
            cli::evaluate::evaluate_command(&config, schedule.as_deref(), context)?;
        }
        Commands::Books { section } => {
            cli::books::books_command(section)?;
        }
        Commands::Achievements => {
            let config = Config::load(Some(config_path.as_path()))?;
            cli::achievements::achievements_command(&config)?;
        }
    }

    Ok(())
}
