//! Timeseries generation parameters and configuration presets.

use randomize_core::types::{Date, GeneratorError, VocabularyError};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Trading days per year used to convert annual drift to daily drift.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Number of standard deviations covered by the max daily change bound.
pub const MAX_CHANGE_SIGMAS: f64 = 3.0;

/// Exclusive upper limit of the max daily change; a clamped step of -100 %
/// or worse would take the value to zero or below.
pub const MAX_CHANGE_LIMIT_PCT: f64 = 100.0;

/// Distribution the per-step percentage change is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDistribution {
    /// `N(daily_drift, max_change_pct / 3)`
    #[default]
    Normal,
    /// `N(-max_change_abs, max_change_abs)` with `max_change_abs` taken from the start value
    Uniform,
}

impl ChangeDistribution {
    /// Returns the display name.
    pub fn name(&self) -> &'static str {
        match self {
            ChangeDistribution::Normal => "Normal",
            ChangeDistribution::Uniform => "Uniform",
        }
    }
}

impl FromStr for ChangeDistribution {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(ChangeDistribution::Normal),
            "uniform" => Ok(ChangeDistribution::Uniform),
            _ => Err(VocabularyError::Unknown {
                kind: "distribution",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ChangeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generator configuration.
///
/// Collapses the dashboard variants (with or without the distribution
/// selector, with or without the daily return column, slider limits on the
/// annual drift) into one record.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeseriesConfig {
    /// Distribution of the per-step change
    pub distribution: ChangeDistribution,
    /// Whether tables carry a daily return column
    pub include_returns: bool,
    /// Accepted range for the annual drift in percent
    pub drift_bound_pct: RangeInclusive<f64>,
    /// Accepted range for the max daily change in percent
    pub max_change_bound_pct: RangeInclusive<f64>,
}

impl TimeseriesConfig {
    /// Plain generator: normal draws, no return column, no limits beyond
    /// [`TimeseriesParams::validate`].
    pub fn basic() -> Self {
        Self {
            distribution: ChangeDistribution::Normal,
            include_returns: false,
            drift_bound_pct: f64::NEG_INFINITY..=f64::INFINITY,
            max_change_bound_pct: f64::NEG_INFINITY..=f64::INFINITY,
        }
    }

    /// Dashboard generator: return column, drift limited to -15 %..=50 % and
    /// max daily change to 1 %..=25 %.
    pub fn dashboard() -> Self {
        Self {
            distribution: ChangeDistribution::Normal,
            include_returns: true,
            drift_bound_pct: -15.0..=50.0,
            max_change_bound_pct: 1.0..=25.0,
        }
    }

    /// Set the distribution.
    pub fn with_distribution(mut self, distribution: ChangeDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set whether tables carry a daily return column.
    pub fn with_returns(mut self, include_returns: bool) -> Self {
        self.include_returns = include_returns;
        self
    }
}

impl Default for TimeseriesConfig {
    fn default() -> Self {
        Self::dashboard()
    }
}

/// Parameters of a single generation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeseriesParams {
    /// Number of points, including the start value
    pub length: usize,
    /// First value of the series
    pub start_value: f64,
    /// Max absolute daily change in percent (3-sigma bound and clamp)
    pub max_change_pct: f64,
    /// Annual drift in percent, positive for growth
    pub annual_drift_pct: f64,
    /// First date of the table; weekends roll forward
    pub start_date: Date,
}

impl TimeseriesParams {
    /// Create parameters with the default start date.
    pub fn new(length: usize, start_value: f64, max_change_pct: f64, annual_drift_pct: f64) -> Self {
        Self {
            length,
            start_value,
            max_change_pct,
            annual_drift_pct,
            ..Self::default()
        }
    }

    /// Set the start date.
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = start_date;
        self
    }

    /// Validate the parameters independent of any configuration.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.length == 0 {
            return Err(GeneratorError::invalid_parameter(
                "length",
                "must be at least 1",
            ));
        }
        if !self.start_value.is_finite() {
            return Err(GeneratorError::invalid_parameter(
                "start_value",
                format!("must be finite, got {}", self.start_value),
            ));
        }
        if !(self.max_change_pct > 0.0 && self.max_change_pct < MAX_CHANGE_LIMIT_PCT) {
            return Err(GeneratorError::invalid_parameter(
                "max_change_pct",
                format!(
                    "must be in (0, {}), got {}",
                    MAX_CHANGE_LIMIT_PCT, self.max_change_pct
                ),
            ));
        }
        if !self.annual_drift_pct.is_finite() {
            return Err(GeneratorError::invalid_parameter(
                "annual_drift_pct",
                format!("must be finite, got {}", self.annual_drift_pct),
            ));
        }
        Ok(())
    }

    /// Standard deviation of the normal draw: the max change is a 3-sigma bound.
    pub fn std_dev(&self) -> f64 {
        self.max_change_pct / MAX_CHANGE_SIGMAS
    }

    /// Daily fractional drift from the annual percentage.
    pub fn daily_drift(&self) -> f64 {
        (self.annual_drift_pct / TRADING_DAYS_PER_YEAR) / 100.0
    }

    /// Absolute max change relative to the start value, used by the uniform branch.
    pub fn max_change_abs(&self) -> f64 {
        self.start_value * self.max_change_pct / 100.0
    }
}

impl Default for TimeseriesParams {
    fn default() -> Self {
        let start_date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
        Self {
            length: 1250,
            start_value: 100.0,
            max_change_pct: 15.0,
            annual_drift_pct: 7.0,
            start_date: start_date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_params() {
        let params = TimeseriesParams::default();
        assert_eq!(params.length, 1250);
        assert_eq!(params.start_value, 100.0);
        assert_eq!(params.start_date.to_string(), "2020-01-01");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_derived_quantities() {
        let params = TimeseriesParams::new(10, 200.0, 15.0, 25.2);
        assert_relative_eq!(params.std_dev(), 5.0);
        assert_relative_eq!(params.daily_drift(), 0.001);
        assert_relative_eq!(params.max_change_abs(), 30.0);
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let err = TimeseriesParams::new(0, 100.0, 10.0, 0.0).validate().unwrap_err();
        assert!(err.to_string().contains("length"));
    }

    #[test]
    fn test_validate_rejects_max_change_outside_open_range() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 100.0, 150.0] {
            let err = TimeseriesParams::new(5, 100.0, bad, 0.0).validate().unwrap_err();
            assert_eq!(err.parameter(), "max_change_pct");
            assert!(err.to_string().contains("max_change_pct"));
        }
    }

    #[test]
    fn test_max_change_just_below_limit_is_accepted() {
        assert!(TimeseriesParams::new(5, 100.0, 99.99, 0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_finite_start_value() {
        let err = TimeseriesParams::new(5, f64::NAN, 10.0, 0.0).validate().unwrap_err();
        assert!(err.to_string().contains("start_value"));
    }

    #[test]
    fn test_presets() {
        let basic = TimeseriesConfig::basic();
        assert!(!basic.include_returns);
        assert!(basic.drift_bound_pct.contains(&1e9));

        let dashboard = TimeseriesConfig::dashboard();
        assert!(dashboard.include_returns);
        assert!(dashboard.drift_bound_pct.contains(&-15.0));
        assert!(dashboard.drift_bound_pct.contains(&50.0));
        assert!(!dashboard.drift_bound_pct.contains(&50.5));
        assert!(dashboard.max_change_bound_pct.contains(&25.0));
        assert!(!dashboard.max_change_bound_pct.contains(&0.5));
        assert!(basic.max_change_bound_pct.contains(&99.0));
    }

    #[test]
    fn test_distribution_parse() {
        assert_eq!("Normal".parse::<ChangeDistribution>(), Ok(ChangeDistribution::Normal));
        assert_eq!("uniform".parse::<ChangeDistribution>(), Ok(ChangeDistribution::Uniform));
        assert!("lognormal".parse::<ChangeDistribution>().is_err());
        assert_eq!(ChangeDistribution::Uniform.to_string(), "Uniform");
    }
}
