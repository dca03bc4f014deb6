//! Clamped random walk with drift.
//!
//! Each step draws a percentage change from a [`ChangeModel`], clamps it to
//! `±max_change_pct` and compounds it onto the previous value:
//!
//! ```text
//! series[i] = series[i-1] * (1 + clamp(change, -max, max) / 100)
//! ```
//!
//! `max_change_pct` is validated to lie in `(0, 100)`, so a positive start
//! value keeps every value strictly positive.

use randomize_core::types::{business_days, GeneratorError};
use tracing::{debug, info};

use super::config::{ChangeDistribution, TimeseriesConfig, TimeseriesParams};
use super::stats::daily_returns;
use super::table::{TimeseriesRow, TimeseriesTable};
use crate::rng::RandomSource;

/// Source of the raw per-step percentage change.
pub trait ChangeModel: Send + Sync {
    /// Draw the unclamped change for the next step, in percent.
    fn draw_change(&self, rng: &mut dyn RandomSource) -> f64;

    /// Get the model name for identification.
    fn name(&self) -> &'static str;
}

/// Normal draws around the daily drift.
///
/// change ~ N(daily_drift, max_change_pct / 3)
#[derive(Debug, Clone, PartialEq)]
pub struct NormalDriftModel {
    /// Daily drift (fractional)
    pub daily_drift: f64,
    /// Standard deviation in percent
    pub std_dev: f64,
}

impl ChangeModel for NormalDriftModel {
    fn draw_change(&self, rng: &mut dyn RandomSource) -> f64 {
        rng.sample_normal(self.daily_drift, self.std_dev)
    }

    fn name(&self) -> &'static str {
        "NormalDrift"
    }
}

/// Draws anchored on the start value, selected by the "Uniform" option.
///
/// change ~ N(-max_change_abs, max_change_abs) where
/// `max_change_abs = start_value * max_change_pct / 100`.
///
/// `max_change_abs` is derived from the initial start value, not the running
/// value, and the draw is normal despite the option name. Both are kept as
/// observed behaviour of the dashboards.
#[derive(Debug, Clone, PartialEq)]
pub struct StartAnchoredModel {
    /// Absolute max change computed from the start value
    pub max_change_abs: f64,
}

impl ChangeModel for StartAnchoredModel {
    fn draw_change(&self, rng: &mut dyn RandomSource) -> f64 {
        rng.sample_normal(-self.max_change_abs, self.max_change_abs)
    }

    fn name(&self) -> &'static str {
        "StartAnchored"
    }
}

/// Build the change model for a distribution and parameter set.
pub fn change_model(
    distribution: ChangeDistribution,
    params: &TimeseriesParams,
) -> Box<dyn ChangeModel> {
    match distribution {
        ChangeDistribution::Normal => Box::new(NormalDriftModel {
            daily_drift: params.daily_drift(),
            std_dev: params.std_dev(),
        }),
        ChangeDistribution::Uniform => Box::new(StartAnchoredModel {
            max_change_abs: params.max_change_abs(),
        }),
    }
}

/// Clamp a raw percentage change to `[-max_change_pct, max_change_pct]`.
#[inline]
pub fn clamp_change(change_percent: f64, max_change_pct: f64) -> f64 {
    change_percent.clamp(-max_change_pct, max_change_pct)
}

/// Generate a clamped random walk of `length` points.
///
/// This is the primitive behind [`TimeseriesGenerator`]; it applies no drift
/// bound.
///
/// # Errors
///
/// `GeneratorError::InvalidParameter` when `length == 0`, `max_change_pct` is
/// outside `(0, 100)`, or an input is not finite. No draw is made in that case.
///
/// # Examples
///
/// ```
/// use randomize_generators::rng::SeededRng;
/// use randomize_generators::timeseries::{generate_timeseries, ChangeDistribution};
///
/// let mut rng = SeededRng::from_seed(42);
/// let series = generate_timeseries(250, 100.0, 7.0, 5.0, ChangeDistribution::Normal, &mut rng).unwrap();
/// assert_eq!(series.len(), 250);
/// assert_eq!(series[0], 100.0);
/// ```
pub fn generate_timeseries<R: RandomSource>(
    length: usize,
    start_value: f64,
    max_change_pct: f64,
    annual_drift_pct: f64,
    distribution: ChangeDistribution,
    rng: &mut R,
) -> Result<Vec<f64>, GeneratorError> {
    let params = TimeseriesParams::new(length, start_value, max_change_pct, annual_drift_pct);
    params.validate()?;
    Ok(random_walk(&params, distribution, rng))
}

fn random_walk<R: RandomSource>(
    params: &TimeseriesParams,
    distribution: ChangeDistribution,
    rng: &mut R,
) -> Vec<f64> {
    let model = change_model(distribution, params);
    let mut series = Vec::with_capacity(params.length);
    series.push(params.start_value);

    let mut current = params.start_value;
    for _ in 1..params.length {
        let change = clamp_change(model.draw_change(&mut *rng), params.max_change_pct);
        current *= 1.0 + change / 100.0;
        series.push(current);
    }

    debug!(model = model.name(), points = series.len(), "Random walk complete");
    series
}

/// Timeseries generator bound to a [`TimeseriesConfig`].
#[derive(Debug, Clone, Default)]
pub struct TimeseriesGenerator {
    config: TimeseriesConfig,
}

impl TimeseriesGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: TimeseriesConfig) -> Self {
        Self { config }
    }

    /// Validate parameters against the configuration.
    pub fn validate(&self, params: &TimeseriesParams) -> Result<(), GeneratorError> {
        params.validate()?;
        let bound = &self.config.max_change_bound_pct;
        if !bound.contains(&params.max_change_pct) {
            return Err(GeneratorError::invalid_parameter(
                "max_change_pct",
                format!(
                    "{} is outside the allowed range [{}, {}]",
                    params.max_change_pct,
                    bound.start(),
                    bound.end()
                ),
            ));
        }
        let bound = &self.config.drift_bound_pct;
        if !bound.contains(&params.annual_drift_pct) {
            return Err(GeneratorError::invalid_parameter(
                "annual_drift_pct",
                format!(
                    "{} is outside the allowed range [{}, {}]",
                    params.annual_drift_pct,
                    bound.start(),
                    bound.end()
                ),
            ));
        }
        Ok(())
    }

    /// Generate the value sequence.
    pub fn generate<R: RandomSource>(
        &self,
        params: &TimeseriesParams,
        rng: &mut R,
    ) -> Result<Vec<f64>, GeneratorError> {
        self.validate(params)?;
        info!(
            length = params.length,
            start_value = params.start_value,
            max_change_pct = params.max_change_pct,
            annual_drift_pct = params.annual_drift_pct,
            distribution = %self.config.distribution,
            "Generating timeseries"
        );
        Ok(random_walk(params, self.config.distribution, rng))
    }

    /// Generate a dated table with an optional daily return column.
    ///
    /// Dates are consecutive business days starting at `params.start_date`.
    pub fn generate_table<R: RandomSource>(
        &self,
        params: &TimeseriesParams,
        rng: &mut R,
    ) -> Result<TimeseriesTable, GeneratorError> {
        self.validate(params)?;
        let dates = business_days(params.start_date, params.length);
        if dates.len() < params.length {
            return Err(GeneratorError::invalid_parameter(
                "length",
                format!(
                    "calendar exhausted after {} business days from {}",
                    dates.len(),
                    params.start_date
                ),
            ));
        }

        let values = self.generate(params, rng)?;
        let returns = daily_returns(&values);

        let rows = dates
            .into_iter()
            .zip(values)
            .enumerate()
            .map(|(i, (date, value))| TimeseriesRow {
                date,
                value,
                daily_return: i.checked_sub(1).map(|prev| returns[prev]),
            })
            .collect();

        Ok(TimeseriesTable::new(rows, self.config.include_returns))
    }
}
