//! Fund-figure records and datasets.

use randomize_core::types::{Date, Qualifier, SeriesSubtype, SeriesType};
use serde::Serialize;
use std::collections::BTreeSet;

use super::filter::FundFigureFilter;

/// One synthetic fund figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FundFigureRecord {
    /// Share class identifier, starting at 10
    pub shareclass_id: u32,
    /// Series type
    pub series_type: SeriesType,
    /// Series subtype
    pub series_subtype: SeriesSubtype,
    /// Currency qualifier
    pub qualifier: Qualifier,
    /// Figure value on `[100, 1_000_000]`, two decimals
    pub value: f64,
    /// Business day the figure applies to
    pub value_date: Date,
}

/// Parameters of a fund-figure generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FundFigureRequest {
    /// First value date; weekends roll forward
    pub start_date: Date,
    /// Number of business days
    pub num_weekdays: usize,
    /// Number of share classes
    pub num_share_classes: u32,
}

impl Default for FundFigureRequest {
    fn default() -> Self {
        let start_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        Self {
            start_date: start_date.into(),
            num_weekdays: 5,
            num_share_classes: 3,
        }
    }
}

/// Generated dataset together with the request that produced it.
///
/// The dataset is owned by the caller and handed to filtering and export
/// explicitly; regenerating produces a new dataset rather than mutating this
/// one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundFigureDataset {
    request: FundFigureRequest,
    records: Vec<FundFigureRecord>,
}

impl FundFigureDataset {
    /// Create a dataset.
    pub fn new(request: FundFigureRequest, records: Vec<FundFigureRecord>) -> Self {
        Self { request, records }
    }

    /// The request this dataset was generated from.
    pub fn request(&self) -> &FundFigureRequest {
        &self.request
    }

    /// Records in generation order.
    pub fn records(&self) -> &[FundFigureRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `filter`, in generation order.
    pub fn filter(&self, filter: &FundFigureFilter) -> Vec<FundFigureRecord> {
        filter.apply(&self.records)
    }

    /// Distinct share class ids, ascending.
    pub fn distinct_shareclass_ids(&self) -> Vec<u32> {
        self.distinct(|r| r.shareclass_id)
    }

    /// Distinct series types in vocabulary order.
    pub fn distinct_series_types(&self) -> Vec<SeriesType> {
        self.distinct(|r| r.series_type)
    }

    /// Distinct series subtypes in vocabulary order.
    pub fn distinct_series_subtypes(&self) -> Vec<SeriesSubtype> {
        self.distinct(|r| r.series_subtype)
    }

    /// Distinct qualifiers in vocabulary order.
    pub fn distinct_qualifiers(&self) -> Vec<Qualifier> {
        self.distinct(|r| r.qualifier)
    }

    /// Distinct value dates, ascending.
    pub fn distinct_value_dates(&self) -> Vec<Date> {
        self.distinct(|r| r.value_date)
    }

    /// Earliest and latest value date.
    pub fn date_bounds(&self) -> Option<(Date, Date)> {
        let min = self.records.iter().map(|r| r.value_date).min()?;
        let max = self.records.iter().map(|r| r.value_date).max()?;
        Some((min, max))
    }

    fn distinct<T: Ord>(&self, key: impl Fn(&FundFigureRecord) -> T) -> Vec<T> {
        self.records
            .iter()
            .map(key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
