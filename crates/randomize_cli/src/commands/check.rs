//! Check command implementation
//!
//! Validates the effective configuration and runs a small seeded generation
//! of each kind to confirm the generators work end to end.

use randomize_generators::fund_figures::{FundFigureGenerator, FundFigureRequest};
use randomize_generators::rng::SeededRng;
use randomize_generators::timeseries::{TimeseriesConfig, TimeseriesGenerator, TimeseriesParams};
use tracing::info;

use crate::config::RandomizeConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &RandomizeConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;

    println!("Configuration");
    println!("  log_level:   {}", config.log_level);
    println!("  output_dir:  {}", config.output_dir.display());
    println!(
        "  seed:        {}",
        config
            .seed
            .map(|seed| seed.to_string())
            .unwrap_or_else(|| "(random per run)".to_string())
    );
    println!(
        "  timeseries:  {} points from {}, start {}, max change {}%, drift {}%, {}",
        config.timeseries.length,
        config.timeseries.start_date,
        config.timeseries.start_value,
        config.timeseries.max_change_pct,
        config.timeseries.annual_drift_pct,
        config.timeseries.distribution
    );
    println!(
        "  fund_figures: {} weekdays from {}, {} share classes",
        config.fund_figures.num_weekdays,
        config.fund_figures.start_date,
        config.fund_figures.num_share_classes
    );

    smoke_test()?;
    println!("All checks passed");
    Ok(())
}

/// Generate a tiny dataset of each kind with a fixed seed.
fn smoke_test() -> Result<()> {
    let mut rng = SeededRng::from_seed(0);

    let generator = TimeseriesGenerator::new(TimeseriesConfig::dashboard());
    let params = TimeseriesParams::new(10, 100.0, 15.0, 7.0);
    let table = generator.generate_table(&params, &mut rng)?;
    info!(points = table.len(), "Timeseries generator OK");

    let request = FundFigureRequest {
        num_weekdays: 1,
        num_share_classes: 1,
        ..FundFigureRequest::default()
    };
    let dataset = FundFigureGenerator::new().generate(&request, &mut rng)?;
    info!(records = dataset.len(), "Fund figure generator OK");

    Ok(())
}
