//! ClimateScope CLI - Command line tool for exploring global weather data.

use clap::Parser;
use cs_core::DashboardConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "climatescope", version, about = "ClimateScope weather data toolkit")]
struct Cli {
    /// JSON configuration file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cs_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => DashboardConfig::from_path(path)?,
        None => DashboardConfig::default(),
    };
    log::debug!("Data path: {}", config.data_path.display());
    cs_cmd::run(cli.command, &config).await
}
