//! Error types for structured error handling.
//!
//! This module provides:
//! - `GeneratorError`: Errors raised by the data generators before any computation starts
//! - `DateError`: Errors from date construction and parsing
//! - `VocabularyError`: Errors from parsing series types, subtypes, and qualifiers

use std::fmt;
use thiserror::Error;

/// Categorised generator errors.
///
/// Every variant is reported synchronously to the caller before any random
/// draw is made. None of them is fatal to the process.
///
/// # Variants
/// - `InvalidParameter`: A count, length, or bound is outside its valid domain
///
/// # Examples
/// ```
/// use randomize_core::types::GeneratorError;
///
/// let err = GeneratorError::invalid_parameter("length", "must be at least 1");
/// assert_eq!(format!("{}", err), "Invalid parameter 'length': must be at least 1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    /// A generation parameter is outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Human readable reason
        reason: String,
    },
}

impl GeneratorError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => *name,
        }
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use randomize_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

/// Vocabulary parsing errors.
///
/// # Examples
/// ```
/// use randomize_core::types::VocabularyError;
///
/// let err = VocabularyError::Unknown { kind: "qualifier", value: "JPY".to_string() };
/// assert_eq!(format!("{}", err), "Unknown qualifier: JPY");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// The value is not part of the fixed vocabulary.
    #[error("Unknown {kind}: {value}")]
    Unknown {
        /// Vocabulary name (series type, series subtype, qualifier)
        kind: &'static str,
        /// The rejected input
        value: String,
    },
}
