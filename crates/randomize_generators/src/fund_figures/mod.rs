//! Synthetic fund-figure datasets.
//!
//! Expands share classes, series types, subtypes, qualifiers and business
//! days into their full Cartesian product, assigning every record a uniform
//! random value, and filters the result column by column.
//!
//! Cardinality is `num_share_classes × 4 × 5 × 3 × num_weekdays`.

mod filter;
mod generator;
mod record;

pub use filter::{DateSelection, FundFigureFilter};
pub use generator::{
    generate_fund_figures, FundFigureGenerator, COMBINATIONS_PER_DAY, FIRST_SHARECLASS_ID,
    MAX_VALUE, MIN_VALUE,
};
pub use record::{FundFigureDataset, FundFigureRecord, FundFigureRequest};
