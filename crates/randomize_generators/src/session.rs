//! Generation session.
//!
//! Holds the most recently generated timeseries and fund-figure dataset for
//! one user. Regenerating replaces the stored result wholesale; nothing is
//! merged and nothing is persisted.

use randomize_core::types::GeneratorError;
use tracing::debug;

use crate::fund_figures::{FundFigureDataset, FundFigureFilter, FundFigureGenerator, FundFigureRecord, FundFigureRequest};
use crate::rng::RandomSource;
use crate::timeseries::{TimeseriesGenerator, TimeseriesParams, TimeseriesTable};

/// Per-session result holder with its own random source.
///
/// # Examples
///
/// ```
/// use randomize_generators::fund_figures::{FundFigureFilter, FundFigureGenerator, FundFigureRequest};
/// use randomize_generators::rng::SeededRng;
/// use randomize_generators::session::GenerationSession;
///
/// let mut session = GenerationSession::new(SeededRng::from_seed(1));
/// session
///     .regenerate_fund_figures(&FundFigureGenerator::new(), &FundFigureRequest::default())
///     .unwrap();
///
/// let all = session.filtered_fund_figures(&FundFigureFilter::new());
/// assert_eq!(all.len(), 3 * 60 * 5);
/// ```
#[derive(Debug)]
pub struct GenerationSession<R: RandomSource> {
    rng: R,
    timeseries: Option<TimeseriesTable>,
    fund_figures: Option<FundFigureDataset>,
}

impl<R: RandomSource> GenerationSession<R> {
    /// Create an empty session drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            timeseries: None,
            fund_figures: None,
        }
    }

    /// Generate a new timeseries, replacing the previous one.
    ///
    /// On error the previous result is kept.
    pub fn regenerate_timeseries(
        &mut self,
        generator: &TimeseriesGenerator,
        params: &TimeseriesParams,
    ) -> Result<&TimeseriesTable, GeneratorError> {
        let table = generator.generate_table(params, &mut self.rng)?;
        debug!(points = table.len(), "Session timeseries replaced");
        Ok(&*self.timeseries.insert(table))
    }

    /// Generate a new fund-figure dataset, replacing the previous one.
    ///
    /// On error the previous result is kept.
    pub fn regenerate_fund_figures(
        &mut self,
        generator: &FundFigureGenerator,
        request: &FundFigureRequest,
    ) -> Result<&FundFigureDataset, GeneratorError> {
        let dataset = generator.generate(request, &mut self.rng)?;
        debug!(records = dataset.len(), "Session fund figures replaced");
        Ok(&*self.fund_figures.insert(dataset))
    }

    /// The current timeseries, if any.
    pub fn timeseries(&self) -> Option<&TimeseriesTable> {
        self.timeseries.as_ref()
    }

    /// The current fund-figure dataset, if any.
    pub fn fund_figures(&self) -> Option<&FundFigureDataset> {
        self.fund_figures.as_ref()
    }

    /// Records of the current dataset passing `filter`; empty when nothing
    /// has been generated yet.
    pub fn filtered_fund_figures(&self, filter: &FundFigureFilter) -> Vec<FundFigureRecord> {
        self.fund_figures
            .as_ref()
            .map(|dataset| dataset.filter(filter))
            .unwrap_or_default()
    }

    /// Drop both results.
    pub fn clear(&mut self) {
        self.timeseries = None;
        self.fund_figures = None;
    }

    /// Access the random source.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
