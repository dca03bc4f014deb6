//! # randomize_generators: Synthetic Financial Data Generators
//!
//! Two independent, stateless generators plus the collaborators that consume
//! their output:
//!
//! - [`timeseries`]: clamped random walk with drift, daily returns, return statistics
//! - [`fund_figures`]: Cartesian product fund-figure datasets and column filtering
//! - [`export`]: semicolon separated CSV export
//! - [`session`]: holder for the most recent result of each generator
//! - [`rng`]: injected random source
//!
//! Every generator takes its random source as an argument, so a fixed seed
//! reproduces a dataset exactly:
//!
//! ```
//! use randomize_core::types::Date;
//! use randomize_generators::prelude::*;
//!
//! let mut rng = SeededRng::from_seed(2024);
//! let dataset = generate_fund_figures(Date::from_ymd(2024, 1, 1).unwrap(), 5, 1, &mut rng).unwrap();
//!
//! let nav = FundFigureFilter::new().with_series_types([SeriesType::NAV]);
//! let csv = dataset.filter(&nav).to_csv_string().unwrap();
//! assert!(csv.starts_with("shareclass_id;series_type;"));
//! ```

pub mod export;
pub mod fund_figures;
pub mod rng;
pub mod session;
pub mod timeseries;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::export::{CsvExport, ExportError};
    pub use crate::fund_figures::{
        generate_fund_figures, DateSelection, FundFigureDataset, FundFigureFilter,
        FundFigureGenerator, FundFigureRecord, FundFigureRequest,
    };
    pub use crate::rng::{RandomSource, SeededRng};
    pub use crate::session::GenerationSession;
    pub use crate::timeseries::{
        daily_returns, generate_timeseries, ChangeDistribution, ReturnHistogram,
        TimeseriesConfig, TimeseriesGenerator, TimeseriesParams, TimeseriesTable,
    };
    pub use randomize_core::types::{Date, GeneratorError, Qualifier, SeriesSubtype, SeriesType};
}
