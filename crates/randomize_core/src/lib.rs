//! # randomize_core: Foundation Types for Synthetic Data Generation
//!
//! ## Foundation Role
//!
//! randomize_core is the bottom layer of the workspace, providing:
//! - Business-day aware dates: `Date`, `business_days` (`types::time`)
//! - Fund-figure vocabularies: `SeriesType`, `SeriesSubtype`, `Qualifier` (`types::vocabulary`)
//! - Error types: `GeneratorError`, `DateError`, `VocabularyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other randomize_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use randomize_core::types::{business_days, Date, Qualifier, SeriesType};
//!
//! // Business-day range starting on a Monday
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let days = business_days(start, 5);
//! assert_eq!(days.last().unwrap().to_string(), "2024-01-05");
//!
//! // Fixed vocabularies
//! assert_eq!(SeriesType::ALL.len(), 4);
//! assert_eq!(Qualifier::CHF.code(), "CHF");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and the vocabulary enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
