//! Column filtering for fund-figure datasets.
//!
//! A filter holds one selection per column. A record is kept when it matches
//! every column (logical AND). An empty selection means "no filter on that
//! column", not "exclude everything".

use randomize_core::types::{Date, Qualifier, SeriesSubtype, SeriesType};
use std::collections::BTreeSet;

use super::record::FundFigureRecord;

/// Selection on the `value_date` column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateSelection {
    /// No restriction
    #[default]
    Any,
    /// Discrete set of dates; an empty set is treated as `Any`
    Dates(BTreeSet<Date>),
    /// Inclusive range; a range with `start > end` matches nothing
    Range {
        /// First date kept
        start: Date,
        /// Last date kept
        end: Date,
    },
}

impl DateSelection {
    /// Whether `date` passes this selection.
    pub fn matches(&self, date: Date) -> bool {
        match self {
            DateSelection::Any => true,
            DateSelection::Dates(dates) => dates.is_empty() || dates.contains(&date),
            DateSelection::Range { start, end } => *start <= date && date <= *end,
        }
    }

    /// True when this selection keeps every date.
    pub fn is_any(&self) -> bool {
        match self {
            DateSelection::Any => true,
            DateSelection::Dates(dates) => dates.is_empty(),
            DateSelection::Range { .. } => false,
        }
    }
}

/// Conjunction of per-column membership predicates.
///
/// # Examples
///
/// ```
/// use randomize_core::types::{Date, Qualifier, SeriesType};
/// use randomize_generators::fund_figures::{generate_fund_figures, FundFigureFilter};
/// use randomize_generators::rng::SeededRng;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let dataset = generate_fund_figures(start, 5, 2, &mut SeededRng::from_seed(9)).unwrap();
///
/// let filter = FundFigureFilter::new()
///     .with_series_types([SeriesType::NAV])
///     .with_qualifiers([Qualifier::CHF, Qualifier::USD])
///     .with_date_range(start, Date::from_ymd(2024, 1, 2).unwrap());
///
/// // 2 share classes x 1 type x 5 subtypes x 2 qualifiers x 2 days
/// assert_eq!(dataset.filter(&filter).len(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FundFigureFilter {
    /// Selected share class ids
    pub shareclass_ids: BTreeSet<u32>,
    /// Selected series types
    pub series_types: BTreeSet<SeriesType>,
    /// Selected series subtypes
    pub series_subtypes: BTreeSet<SeriesSubtype>,
    /// Selected qualifiers
    pub qualifiers: BTreeSet<Qualifier>,
    /// Value date selection
    pub value_dates: DateSelection,
}

impl FundFigureFilter {
    /// Create a filter that keeps every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given share class ids.
    pub fn with_shareclass_ids(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.shareclass_ids.extend(ids);
        self
    }

    /// Restrict to the given series types.
    pub fn with_series_types(mut self, types: impl IntoIterator<Item = SeriesType>) -> Self {
        self.series_types.extend(types);
        self
    }

    /// Restrict to the given series subtypes.
    pub fn with_series_subtypes(
        mut self,
        subtypes: impl IntoIterator<Item = SeriesSubtype>,
    ) -> Self {
        self.series_subtypes.extend(subtypes);
        self
    }

    /// Restrict to the given qualifiers.
    pub fn with_qualifiers(mut self, qualifiers: impl IntoIterator<Item = Qualifier>) -> Self {
        self.qualifiers.extend(qualifiers);
        self
    }

    /// Restrict to a discrete set of value dates.
    pub fn with_dates(mut self, dates: impl IntoIterator<Item = Date>) -> Self {
        self.value_dates = DateSelection::Dates(dates.into_iter().collect());
        self
    }

    /// Restrict to an inclusive value date range.
    pub fn with_date_range(mut self, start: Date, end: Date) -> Self {
        self.value_dates = DateSelection::Range { start, end };
        self
    }

    /// True when no column is restricted.
    pub fn is_unfiltered(&self) -> bool {
        self.shareclass_ids.is_empty()
            && self.series_types.is_empty()
            && self.series_subtypes.is_empty()
            && self.qualifiers.is_empty()
            && self.value_dates.is_any()
    }

    /// Whether a single record passes every column selection.
    pub fn matches(&self, record: &FundFigureRecord) -> bool {
        selected(&self.shareclass_ids, &record.shareclass_id)
            && selected(&self.series_types, &record.series_type)
            && selected(&self.series_subtypes, &record.series_subtype)
            && selected(&self.qualifiers, &record.qualifier)
            && self.value_dates.matches(record.value_date)
    }

    /// Records passing the filter, in their original order.
    pub fn apply(&self, records: &[FundFigureRecord]) -> Vec<FundFigureRecord> {
        records.iter().filter(|r| self.matches(r)).copied().collect()
    }
}

fn selected<T: Ord>(selection: &BTreeSet<T>, value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund_figures::{generate_fund_figures, FundFigureDataset};
    use crate::rng::SeededRng;

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 1, day).unwrap()
    }

    fn dataset() -> FundFigureDataset {
        generate_fund_figures(d(1), 5, 3, &mut SeededRng::from_seed(11)).unwrap()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let dataset = dataset();
        let filter = FundFigureFilter::new();
        assert!(filter.is_unfiltered());
        assert_eq!(dataset.filter(&filter), dataset.records());
    }

    #[test]
    fn test_empty_date_set_is_no_filter() {
        let filter = FundFigureFilter::new().with_dates(Vec::new());
        assert!(filter.is_unfiltered());
        assert_eq!(dataset().filter(&filter).len(), 900);
    }

    #[test]
    fn test_columns_combine_with_and() {
        let filter = FundFigureFilter::new()
            .with_shareclass_ids([10, 12])
            .with_series_types([SeriesType::IR])
            .with_series_subtypes([SeriesSubtype::Subtype4])
            .with_qualifiers([Qualifier::EUR]);

        let kept = dataset().filter(&filter);
        assert_eq!(kept.len(), 2 * 5);
        assert!(kept.iter().all(|r| (r.shareclass_id == 10 || r.shareclass_id == 12)
            && r.series_type == SeriesType::IR
            && r.series_subtype == SeriesSubtype::Subtype4
            && r.qualifier == Qualifier::EUR));
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let filter = FundFigureFilter::new().with_date_range(d(2), d(4));
        let kept = dataset().filter(&filter);
        assert_eq!(kept.len(), 3 * 60 * 3);
        assert!(kept.iter().any(|r| r.value_date == d(2)));
        assert!(kept.iter().any(|r| r.value_date == d(4)));
    }

    #[test]
    fn test_reversed_range_matches_nothing() {
        let filter = FundFigureFilter::new().with_date_range(d(4), d(2));
        assert!(dataset().filter(&filter).is_empty());
    }

    #[test]
    fn test_discrete_dates() {
        let filter = FundFigureFilter::new().with_dates([d(1), d(5), d(6)]);
        assert_eq!(dataset().filter(&filter).len(), 3 * 60 * 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let dataset = dataset();
        let filter = FundFigureFilter::new().with_qualifiers([Qualifier::USD]);
        let kept = dataset.filter(&filter);
        let expected: Vec<_> = dataset
            .records()
            .iter()
            .filter(|r| r.qualifier == Qualifier::USD)
            .copied()
            .collect();
        assert_eq!(kept, expected);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::subsequence;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn test_filter_is_idempotent(
                ids in subsequence(vec![10u32, 11, 12], 0..=3),
                types in subsequence(SeriesType::ALL.to_vec(), 0..=4),
                subtypes in subsequence(SeriesSubtype::ALL.to_vec(), 0..=5),
                qualifiers in subsequence(Qualifier::ALL.to_vec(), 0..=3),
                start in 1u32..6,
                span in 0u32..5,
            ) {
                let filter = FundFigureFilter::new()
                    .with_shareclass_ids(ids)
                    .with_series_types(types)
                    .with_series_subtypes(subtypes)
                    .with_qualifiers(qualifiers)
                    .with_date_range(d(start), d(start + span));

                let once = dataset().filter(&filter);
                let twice = filter.apply(&once);
                prop_assert_eq!(&once, &twice);
                prop_assert!(once.iter().all(|r| filter.matches(r)));
            }
        }
    }
}
