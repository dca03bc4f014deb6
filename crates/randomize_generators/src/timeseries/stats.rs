//! Derived return statistics.
//!
//! - [`daily_returns`]: percentage change between consecutive values
//! - [`total_return_pct`]: percentage change from first to last value
//! - [`ReturnHistogram`]: equal-width histogram of returns

use serde::Serialize;

/// Default number of histogram bins.
pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

/// Daily returns in percent.
///
/// `returns[i] = (series[i+1] - series[i]) / series[i] * 100`, so the result
/// has one fewer element than the input (and is empty for fewer than two
/// values).
///
/// # Examples
///
/// ```
/// use randomize_generators::timeseries::daily_returns;
///
/// let returns = daily_returns(&[100.0, 110.0, 99.0]);
/// assert_eq!(returns.len(), 2);
/// assert!((returns[0] - 10.0).abs() < 1e-12);
/// assert!((returns[1] + 10.0).abs() < 1e-12);
/// ```
pub fn daily_returns(series: &[f64]) -> Vec<f64> {
    series
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) / pair[0] * 100.0)
        .collect()
}

/// Total return from the first to the last value, in percent.
///
/// Returns `None` for an empty series.
pub fn total_return_pct(series: &[f64]) -> Option<f64> {
    let first = series.first()?;
    let last = series.last()?;
    Some((last / first - 1.0) * 100.0)
}

/// One histogram bin covering `[lower, upper)`; the last bin is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Number of returns in the bin
    pub count: usize,
}

/// Equal-width histogram of daily returns.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ReturnHistogram {
    bins: Vec<HistogramBin>,
}

impl ReturnHistogram {
    /// Bin the finite values of `returns` into `bins` equal-width bins over
    /// `[min, max]`.
    ///
    /// When every value is equal the range is widened to `value ± 0.5`.
    /// Empty input or `bins == 0` yields an empty histogram.
    pub fn from_returns(returns: &[f64], bins: usize) -> Self {
        let finite: Vec<f64> = returns.iter().copied().filter(|r| r.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return Self::default();
        }

        let mut min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        let width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for value in &finite {
            let index = (((value - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: min + width * i as f64,
                upper: min + width * (i + 1) as f64,
                count,
            })
            .collect();

        Self { bins }
    }

    /// Bins in ascending order.
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
