//! Randomize CLI - Synthetic Financial Data from the Command Line
//!
//! # Commands
//!
//! - `randomize timeseries` - Generate a clamped random walk with drift
//! - `randomize fund-figures` - Generate and filter a fund-figure dataset
//! - `randomize check` - Validate the configuration and smoke test the generators
//!
//! Defaults come from `randomize.toml` (see [`config`]) and `RANDOMIZE_*`
//! environment variables; flags override both.

use clap::{Parser, Subcommand};
use std::path::Path;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::fund_figures::FundFigureArgs;
use commands::timeseries::TimeseriesArgs;
use config::RandomizeConfig;

/// Synthetic timeseries and fund-figure generator
#[derive(Parser)]
#[command(name = "randomize")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(long, global = true, default_value = "randomize.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random walk timeseries and export it as CSV
    Timeseries(TimeseriesArgs),

    /// Generate, filter and export a fund-figure dataset
    FundFigures(FundFigureArgs),

    /// Check configuration and generators
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = Path::new(&cli.config);
    let (config, ignored) = RandomizeConfig::load_or_default(config_path)?.with_env_override();

    // Initialise tracing; RUST_LOG wins over the configured level
    let level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    if !config_path.exists() {
        debug!(path = %config_path.display(), "No configuration file, using defaults");
    }
    for message in &ignored {
        warn!("{}", message);
    }

    // Generator parameters are validated after the flags are merged
    match cli.command {
        Commands::Timeseries(args) => {
            config.validate_settings()?;
            commands::timeseries::run(&args, &config)?
        }
        Commands::FundFigures(args) => {
            config.validate_settings()?;
            commands::fund_figures::run(&args, &config)?
        }
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
