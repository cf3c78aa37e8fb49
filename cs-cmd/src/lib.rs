//! Command implementations for the ClimateScope CLI.
//!
//! Provides subcommands for inspecting a weather CSV, driving the image
//! rotation timer, and replaying recorded dashboard events.

use clap::Subcommand;
use cs_core::{DashboardConfig, RotationInterval};
use cs_data::TemperatureUnit;
use std::path::PathBuf;

pub mod replay;
pub mod report;
pub mod rotate;

#[derive(Subcommand)]
pub enum Command {
    /// List the distinct countries in the dataset
    Countries {
        /// Weather CSV (defaults to the configured data path)
        #[arg(short = 'c', long)]
        csv: Option<PathBuf>,
    },

    /// Print metrics, alerts and condition counts for one country
    Summary {
        /// Weather CSV (defaults to the configured data path)
        #[arg(short = 'c', long)]
        csv: Option<PathBuf>,

        /// Country to summarize
        #[arg(long)]
        country: String,

        /// Temperature unit: celsius or fahrenheit
        #[arg(short = 'u', long, default_value = "celsius")]
        unit: TemperatureUnit,

        /// Also print the chronological temperature trend
        #[arg(long)]
        trend: bool,
    },

    /// Print row, column and missing-value counts
    Overview {
        /// Weather CSV (defaults to the configured data path)
        #[arg(short = 'c', long)]
        csv: Option<PathBuf>,
    },

    /// Run the image rotation timer and print the image shown on each tick
    Rotate {
        /// Refresh interval in seconds: 15, 30 or 60
        #[arg(short = 'i', long, default_value_t = 15)]
        interval: u64,

        /// Number of ticks before stopping
        #[arg(short = 'n', long, default_value_t = 4)]
        ticks: u64,
    },

    /// Apply a JSON array of events to a fresh session and print the outcome
    Replay {
        /// JSON file holding the events
        #[arg(short = 'e', long)]
        events: PathBuf,

        /// Weather CSV (defaults to the configured data path)
        #[arg(short = 'c', long)]
        csv: Option<PathBuf>,
    },
}

pub async fn run(command: Command, config: &DashboardConfig) -> anyhow::Result<()> {
    match command {
        Command::Countries { csv } => {
            let dataset = report::load_dataset(csv.as_deref(), config)?;
            println!("{}", report::countries_report(&dataset)?);
        }
        Command::Summary {
            csv,
            country,
            unit,
            trend,
        } => {
            let dataset = report::load_dataset(csv.as_deref(), config)?;
            println!(
                "{}",
                report::summary_report(&dataset, &country, unit, trend, &config.thresholds())?
            );
        }
        Command::Overview { csv } => {
            let dataset = report::load_dataset(csv.as_deref(), config)?;
            println!("{}", report::overview_report(&dataset));
        }
        Command::Rotate { interval, ticks } => {
            let interval = RotationInterval::from_secs(interval)
                .ok_or_else(|| anyhow::anyhow!("Unsupported interval {}s (use 15, 30 or 60)", interval))?;
            rotate::run_rotate(config, interval, ticks, |line| println!("{}", line)).await?;
        }
        Command::Replay { events, csv } => {
            let events = replay::read_events(&events)?;
            let dataset = report::load_dataset(csv.as_deref(), config);
            println!("{}", replay::replay(config, events, dataset.as_deref())?);
        }
    }
    Ok(())
}
