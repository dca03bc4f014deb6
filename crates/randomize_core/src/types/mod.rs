//! Core time, vocabulary, and error types.
//!
//! This module provides:
//! - `time`: `Date` wrapper with business-day arithmetic and `business_days` ranges
//! - `vocabulary`: the fixed categorical dimensions of a fund-figure record
//! - `error`: Structured error types for generators, dates, and vocabulary parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`business_days`] from `time`
//! - [`SeriesType`], [`SeriesSubtype`], [`Qualifier`] from `vocabulary`
//! - [`GeneratorError`], [`DateError`], [`VocabularyError`] from `error`

pub mod error;
pub mod time;
pub mod vocabulary;

// Re-export commonly used types at module level
pub use error::{DateError, GeneratorError, VocabularyError};
pub use time::{business_days, Date};
pub use vocabulary::{Qualifier, SeriesSubtype, SeriesType};
