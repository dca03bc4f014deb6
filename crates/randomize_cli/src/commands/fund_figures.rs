//! Fund-figures command implementation
//!
//! Generates the Cartesian product dataset, applies the column filters given
//! on the command line and writes the result as CSV, JSON or a table.

use clap::{Args, ValueEnum};
use randomize_core::types::{Date, Qualifier, SeriesSubtype, SeriesType};
use randomize_generators::export::CsvExport;
use randomize_generators::fund_figures::{
    FundFigureDataset, FundFigureFilter, FundFigureGenerator, FundFigureRecord, FundFigureRequest,
};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{seeded_rng, write_csv, write_text, Destination};
use crate::config::RandomizeConfig;
use crate::{CliError, Result};

/// Rows shown by the table format before truncating.
const TABLE_PREVIEW_ROWS: usize = 20;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Semicolon separated values
    #[default]
    Csv,
    /// JSON array of records
    Json,
    /// Preview table on standard output
    Table,
}

/// Arguments of the `fund-figures` command
#[derive(Debug, Clone, Default, Args)]
pub struct FundFigureArgs {
    /// First value date (YYYY-MM-DD); weekends roll forward
    #[arg(long)]
    pub start_date: Option<String>,

    /// Number of business days
    #[arg(short, long)]
    pub weekdays: Option<usize>,

    /// Number of share classes
    #[arg(short = 'c', long)]
    pub share_classes: Option<u32>,

    /// Random seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Keep only these share class ids
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<u32>,

    /// Keep only these series types (NAV, FXRATES, IR, DISTR)
    #[arg(long, value_delimiter = ',')]
    pub types: Vec<String>,

    /// Keep only these series subtypes (subtype1..subtype5)
    #[arg(long, value_delimiter = ',')]
    pub subtypes: Vec<String>,

    /// Keep only these qualifiers (CHF, EUR, USD)
    #[arg(long, value_delimiter = ',')]
    pub qualifiers: Vec<String>,

    /// Keep only these value dates
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["from", "to"])]
    pub dates: Vec<String>,

    /// First value date kept (inclusive)
    #[arg(long)]
    pub from: Option<String>,

    /// Last value date kept (inclusive)
    #[arg(long)]
    pub to: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Output file (default: <output_dir>/fund_figures.csv or .json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the output to standard output
    #[arg(long)]
    pub stdout: bool,
}

impl FundFigureArgs {
    /// Generation request: file defaults overridden by flags.
    pub fn request(&self, config: &RandomizeConfig) -> Result<FundFigureRequest> {
        let mut request = config.fund_figures.request();
        if let Some(date) = &self.start_date {
            request.start_date = Date::parse(date)?;
        }
        if let Some(weekdays) = self.weekdays {
            request.num_weekdays = weekdays;
        }
        if let Some(share_classes) = self.share_classes {
            request.num_share_classes = share_classes;
        }
        Ok(request)
    }

    /// Column filter from the flags.
    ///
    /// A one-sided date range is closed with the dataset's own first or last
    /// value date.
    pub fn filter(&self, dataset: &FundFigureDataset) -> Result<FundFigureFilter> {
        let mut filter = FundFigureFilter::new()
            .with_shareclass_ids(self.ids.iter().copied())
            .with_series_types(parse_all::<SeriesType>(&self.types)?)
            .with_series_subtypes(parse_all::<SeriesSubtype>(&self.subtypes)?)
            .with_qualifiers(parse_all::<Qualifier>(&self.qualifiers)?);

        if !self.dates.is_empty() {
            let dates = self
                .dates
                .iter()
                .map(|d| Date::parse(d))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            filter = filter.with_dates(dates);
        } else if self.from.is_some() || self.to.is_some() {
            if let Some((first, last)) = dataset.date_bounds() {
                let start = self.from.as_deref().map(Date::parse).transpose()?.unwrap_or(first);
                let end = self.to.as_deref().map(Date::parse).transpose()?.unwrap_or(last);
                filter = filter.with_date_range(start, end);
            }
        }

        Ok(filter)
    }
}

fn parse_all<T>(values: &[String]) -> Result<Vec<T>>
where
    T: std::str::FromStr,
    CliError: From<T::Err>,
{
    values
        .iter()
        .map(|value| value.parse::<T>().map_err(CliError::from))
        .collect()
}

/// Run the fund-figures command
pub fn run(args: &FundFigureArgs, config: &RandomizeConfig) -> Result<()> {
    let request = args.request(config)?;
    let mut rng = seeded_rng(args.seed.or(config.seed));

    let dataset = FundFigureGenerator::new().generate(&request, &mut rng)?;
    let filter = args.filter(&dataset)?;
    let records = dataset.filter(&filter);
    info!(
        generated = dataset.len(),
        kept = records.len(),
        "Fund figures filtered"
    );
    if filter.is_unfiltered() {
        debug!("No column filter applied");
    }

    match args.format {
        OutputFormat::Csv => {
            let destination = Destination::resolve(
                args.output.as_deref(),
                args.stdout,
                &config.output_dir,
                records.file_name(),
            );
            write_csv(records.as_slice(), &destination)?;
        }
        OutputFormat::Json => {
            let destination = Destination::resolve(
                args.output.as_deref(),
                args.stdout,
                &config.output_dir,
                "fund_figures.json",
            );
            write_text(&serde_json::to_string_pretty(&records)?, &destination)?;
        }
        OutputFormat::Table => {
            if args.output.is_some() {
                return Err(CliError::invalid_argument(
                    "--output is not supported with --format table",
                ));
            }
            println!("{}", render_table(&records));
        }
    }

    Ok(())
}

/// Preview table of the first records.
pub fn render_table(records: &[FundFigureRecord]) -> String {
    let mut lines = vec![
        "┌──────────┬─────────┬──────────┬───────────┬──────────────┬────────────┐".to_string(),
        "│ Share ID │ Type    │ Subtype  │ Qualifier │ Value        │ Value Date │".to_string(),
        "├──────────┼─────────┼──────────┼───────────┼──────────────┼────────────┤".to_string(),
    ];

    if records.is_empty() {
        lines.push(
            "│ (no data)│         │          │           │              │            │".to_string(),
        );
    }
    for record in records.iter().take(TABLE_PREVIEW_ROWS) {
        lines.push(format!(
            "│ {:<8} │ {:<7} │ {:<8} │ {:<9} │ {:>12.2} │ {} │",
            record.shareclass_id,
            record.series_type,
            record.series_subtype,
            record.qualifier,
            record.value,
            record.value_date
        ));
    }
    lines.push(
        "└──────────┴─────────┴──────────┴───────────┴──────────────┴────────────┘".to_string(),
    );

    if records.len() > TABLE_PREVIEW_ROWS {
        lines.push(format!(
            "... {} more records",
            records.len() - TABLE_PREVIEW_ROWS
        ));
    }
    lines.join("\n")
}
