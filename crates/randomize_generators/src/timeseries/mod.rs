//! Random walk timeseries generation.
//!
//! Produces a single price series by compounding clamped random percentage
//! changes with drift, and derives daily returns and summary statistics
//! from it.
//!
//! ## Change Models
//!
//! - **Normal**: `N(daily_drift, max_change_pct / 3)`, the max daily change
//!   being read as a 3-sigma bound
//! - **Uniform**: `N(-max_change_abs, max_change_abs)` anchored on the start
//!   value (see [`StartAnchoredModel`])
//!
//! ## Example
//!
//! ```
//! use randomize_generators::rng::SeededRng;
//! use randomize_generators::timeseries::{TimeseriesConfig, TimeseriesGenerator, TimeseriesParams};
//!
//! let generator = TimeseriesGenerator::new(TimeseriesConfig::dashboard());
//! let params = TimeseriesParams::default();
//! let table = generator.generate_table(&params, &mut SeededRng::from_seed(1)).unwrap();
//!
//! assert_eq!(table.len(), 1250);
//! assert_eq!(table.daily_returns().len(), 1249);
//! ```

mod config;
mod generator;
mod stats;
mod table;

pub use config::{
    ChangeDistribution, TimeseriesConfig, TimeseriesParams, MAX_CHANGE_LIMIT_PCT, MAX_CHANGE_SIGMAS,
    TRADING_DAYS_PER_YEAR,
};
pub use generator::{
    change_model, clamp_change, generate_timeseries, ChangeModel, NormalDriftModel,
    StartAnchoredModel, TimeseriesGenerator,
};
pub use stats::{
    daily_returns, total_return_pct, HistogramBin, ReturnHistogram, DEFAULT_HISTOGRAM_BINS,
};
pub use table::{TimeseriesRow, TimeseriesTable};
