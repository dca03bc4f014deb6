//! Dated timeseries table.

use randomize_core::types::Date;
use serde::Serialize;

use super::stats::{daily_returns, total_return_pct, ReturnHistogram};

/// One row of a generated timeseries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeseriesRow {
    /// Business day of the observation
    pub date: Date,
    /// Price level
    pub value: f64,
    /// Percentage change from the previous row; `None` on the first row
    pub daily_return: Option<f64>,
}

/// Immutable result of a timeseries generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeseriesTable {
    rows: Vec<TimeseriesRow>,
    include_returns: bool,
}

impl TimeseriesTable {
    /// Create a table from rows.
    pub fn new(rows: Vec<TimeseriesRow>, include_returns: bool) -> Self {
        Self {
            rows,
            include_returns,
        }
    }

    /// Rows in date order.
    pub fn rows(&self) -> &[TimeseriesRow] {
        &self.rows
    }

    /// Whether exports carry the daily return column.
    pub fn include_returns(&self) -> bool {
        self.include_returns
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Price levels in date order.
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.value).collect()
    }

    /// Daily returns in percent, one fewer than the number of rows.
    pub fn daily_returns(&self) -> Vec<f64> {
        daily_returns(&self.values())
    }

    /// Total return over the whole table in percent.
    pub fn total_return_pct(&self) -> Option<f64> {
        total_return_pct(&self.values())
    }

    /// Histogram of the daily returns.
    pub fn return_histogram(&self, bins: usize) -> ReturnHistogram {
        ReturnHistogram::from_returns(&self.daily_returns(), bins)
    }
}
