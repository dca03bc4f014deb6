//! Fixed categorical vocabularies of a fund-figure record.
//!
//! A fund figure is identified by its share class, a series type, a series
//! subtype and a qualifier (the currency the figure is quoted in). The three
//! categorical dimensions are closed sets; `ALL` lists each in the order used
//! for Cartesian product expansion.
//!
//! # Examples
//!
//! ```
//! use randomize_core::types::vocabulary::{Qualifier, SeriesSubtype, SeriesType};
//!
//! let combinations = SeriesType::ALL.len() * SeriesSubtype::ALL.len() * Qualifier::ALL.len();
//! assert_eq!(combinations, 60);
//!
//! let nav: SeriesType = "nav".parse().unwrap();
//! assert_eq!(nav, SeriesType::NAV);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::VocabularyError;

/// Kind of figure a series carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeriesType {
    /// Net asset value
    NAV,
    /// Foreign exchange rates
    FXRATES,
    /// Interest rates
    IR,
    /// Distributions
    DISTR,
}

impl SeriesType {
    /// All series types in expansion order.
    pub const ALL: [SeriesType; 4] = [
        SeriesType::NAV,
        SeriesType::FXRATES,
        SeriesType::IR,
        SeriesType::DISTR,
    ];

    /// Returns the export label.
    pub fn code(&self) -> &'static str {
        match self {
            SeriesType::NAV => "NAV",
            SeriesType::FXRATES => "FXRATES",
            SeriesType::IR => "IR",
            SeriesType::DISTR => "DISTR",
        }
    }
}

impl FromStr for SeriesType {
    type Err = VocabularyError;

    /// Parses a series type label (case-insensitive).
    fn from_str(s: &str) -> Result<Self, VocabularyError> {
        match s.trim().to_uppercase().as_str() {
            "NAV" => Ok(SeriesType::NAV),
            "FXRATES" => Ok(SeriesType::FXRATES),
            "IR" => Ok(SeriesType::IR),
            "DISTR" => Ok(SeriesType::DISTR),
            _ => Err(VocabularyError::Unknown {
                kind: "series type",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Subtype of a series, exported as `subtype1` .. `subtype5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SeriesSubtype {
    /// `subtype1`
    Subtype1,
    /// `subtype2`
    Subtype2,
    /// `subtype3`
    Subtype3,
    /// `subtype4`
    Subtype4,
    /// `subtype5`
    Subtype5,
}

impl SeriesSubtype {
    /// All subtypes in expansion order.
    pub const ALL: [SeriesSubtype; 5] = [
        SeriesSubtype::Subtype1,
        SeriesSubtype::Subtype2,
        SeriesSubtype::Subtype3,
        SeriesSubtype::Subtype4,
        SeriesSubtype::Subtype5,
    ];

    /// Returns the export label.
    pub fn code(&self) -> &'static str {
        match self {
            SeriesSubtype::Subtype1 => "subtype1",
            SeriesSubtype::Subtype2 => "subtype2",
            SeriesSubtype::Subtype3 => "subtype3",
            SeriesSubtype::Subtype4 => "subtype4",
            SeriesSubtype::Subtype5 => "subtype5",
        }
    }
}

impl FromStr for SeriesSubtype {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, VocabularyError> {
        SeriesSubtype::ALL
            .into_iter()
            .find(|subtype| subtype.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VocabularyError::Unknown {
                kind: "series subtype",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for SeriesSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Currency qualifier of a fund figure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Qualifier {
    /// Swiss Franc
    CHF,
    /// Euro
    EUR,
    /// United States Dollar
    USD,
}

impl Qualifier {
    /// All qualifiers in expansion order.
    pub const ALL: [Qualifier; 3] = [Qualifier::CHF, Qualifier::EUR, Qualifier::USD];

    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Qualifier::CHF => "CHF",
            Qualifier::EUR => "EUR",
            Qualifier::USD => "USD",
        }
    }
}

impl FromStr for Qualifier {
    type Err = VocabularyError;

    /// Parses an ISO 4217 code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, VocabularyError> {
        match s.trim().to_uppercase().as_str() {
            "CHF" => Ok(Qualifier::CHF),
            "EUR" => Ok(Qualifier::EUR),
            "USD" => Ok(Qualifier::USD),
            _ => Err(VocabularyError::Unknown {
                kind: "qualifier",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
