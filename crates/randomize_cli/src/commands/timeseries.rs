//! Timeseries command implementation
//!
//! Generates a clamped random walk, prints its summary statistics and writes
//! the `;`-separated CSV export.

use clap::Args;
use randomize_core::types::Date;
use randomize_generators::export::CsvExport;
use randomize_generators::timeseries::{
    ChangeDistribution, ReturnHistogram, TimeseriesConfig, TimeseriesGenerator, TimeseriesParams,
    TimeseriesTable, DEFAULT_HISTOGRAM_BINS,
};
use std::path::PathBuf;
use tracing::info;

use super::{seeded_rng, write_csv, Destination};
use crate::config::RandomizeConfig;
use crate::Result;

/// Width of the widest histogram bar in characters.
const HISTOGRAM_WIDTH: usize = 40;

/// Arguments of the `timeseries` command
#[derive(Debug, Clone, Default, Args)]
pub struct TimeseriesArgs {
    /// First date (YYYY-MM-DD); weekends roll forward
    #[arg(long)]
    pub start_date: Option<String>,

    /// First value of the series
    #[arg(long)]
    pub start_value: Option<f64>,

    /// Number of points
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Max daily change in percent
    #[arg(short, long)]
    pub max_change: Option<f64>,

    /// Annual drift in percent
    #[arg(short, long, allow_hyphen_values = true)]
    pub drift: Option<f64>,

    /// Change distribution (normal, uniform)
    #[arg(long)]
    pub distribution: Option<String>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Plain generator: no return column, no drift limit
    #[arg(long)]
    pub basic: bool,

    /// Print the daily return histogram
    #[arg(long)]
    pub histogram: bool,

    /// Output file (default: <output_dir>/timeseries.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the CSV to standard output
    #[arg(long)]
    pub stdout: bool,
}

impl TimeseriesArgs {
    /// Generator configuration: file defaults overridden by flags.
    pub fn generator_config(&self, config: &RandomizeConfig) -> Result<TimeseriesConfig> {
        let distribution = match &self.distribution {
            Some(name) => name.parse::<ChangeDistribution>()?,
            None => config.timeseries.distribution,
        };

        let base = if self.basic {
            TimeseriesConfig::basic()
        } else {
            TimeseriesConfig::dashboard().with_returns(config.timeseries.include_returns)
        };
        Ok(base.with_distribution(distribution))
    }

    /// Generator parameters: file defaults overridden by flags.
    pub fn params(&self, config: &RandomizeConfig) -> Result<TimeseriesParams> {
        let mut params = config.timeseries.params();
        if let Some(date) = &self.start_date {
            params.start_date = Date::parse(date)?;
        }
        if let Some(start_value) = self.start_value {
            params.start_value = start_value;
        }
        if let Some(length) = self.length {
            params.length = length;
        }
        if let Some(max_change) = self.max_change {
            params.max_change_pct = max_change;
        }
        if let Some(drift) = self.drift {
            params.annual_drift_pct = drift;
        }
        Ok(params)
    }
}

/// Run the timeseries command
pub fn run(args: &TimeseriesArgs, config: &RandomizeConfig) -> Result<()> {
    let generator = TimeseriesGenerator::new(args.generator_config(config)?);
    let params = args.params(config)?;
    let mut rng = seeded_rng(args.seed.or(config.seed));

    let table = generator.generate_table(&params, &mut rng)?;
    info!(points = table.len(), "Timeseries generated");

    let destination = Destination::resolve(
        args.output.as_deref(),
        args.stdout,
        &config.output_dir,
        table.file_name(),
    );
    write_csv(&table, &destination)?;

    // Keep stdout clean for the CSV
    if !args.stdout {
        println!("{}", summary(&table));
        if args.histogram {
            println!("{}", render_histogram(&table.return_histogram(DEFAULT_HISTOGRAM_BINS)));
        }
    }

    Ok(())
}

/// One-line summary of a generated table.
pub fn summary(table: &TimeseriesTable) -> String {
    let rows = table.rows();
    match (rows.first(), rows.last(), table.total_return_pct()) {
        (Some(first), Some(last), Some(total_return)) => format!(
            "{} points from {} to {}: {:.2} -> {:.2}, total return {:.2}%",
            table.len(),
            first.date,
            last.date,
            first.value,
            last.value,
            total_return
        ),
        _ => "empty timeseries".to_string(),
    }
}

/// Text rendering of a return histogram, one line per bin.
pub fn render_histogram(histogram: &ReturnHistogram) -> String {
    let max_count = histogram.max_count().max(1);
    histogram
        .bins()
        .iter()
        .map(|bin| {
            let bar = "#".repeat(bin.count * HISTOGRAM_WIDTH / max_count);
            format!(
                "{:>9.3} .. {:>9.3} | {:<width$} {}",
                bin.lower,
                bin.upper,
                bar,
                bin.count,
                width = HISTOGRAM_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
