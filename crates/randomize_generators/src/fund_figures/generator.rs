//! Cartesian product fund-figure generator.

use randomize_core::types::{business_days, Date, GeneratorError, Qualifier, SeriesSubtype, SeriesType};
use tracing::{debug, info};

use super::record::{FundFigureDataset, FundFigureRecord, FundFigureRequest};
use crate::rng::RandomSource;

/// Share class ids start here and increase by one per share class.
pub const FIRST_SHARECLASS_ID: u32 = 10;

/// Lower bound of generated values.
pub const MIN_VALUE: f64 = 100.0;

/// Upper bound of generated values.
pub const MAX_VALUE: f64 = 1_000_000.0;

/// Number of (series type, subtype, qualifier) combinations per share class and day.
pub const COMBINATIONS_PER_DAY: usize =
    SeriesType::ALL.len() * SeriesSubtype::ALL.len() * Qualifier::ALL.len();

/// Generates a fund-figure dataset by full Cartesian product expansion.
///
/// Records are emitted with the nesting order
/// `shareclass_id → series_type → series_subtype → qualifier → value_date`
/// and each carries an independent uniform value on `[100, 1_000_000]`
/// rounded to two decimals.
#[derive(Debug, Clone, Default)]
pub struct FundFigureGenerator;

impl FundFigureGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Number of records a request expands to, or `None` on overflow.
    pub fn cardinality(request: &FundFigureRequest) -> Option<usize> {
        (request.num_share_classes as usize)
            .checked_mul(COMBINATIONS_PER_DAY)?
            .checked_mul(request.num_weekdays)
    }

    /// Validate a request before any draw is made.
    pub fn validate(&self, request: &FundFigureRequest) -> Result<(), GeneratorError> {
        if request.num_weekdays == 0 {
            return Err(GeneratorError::invalid_parameter(
                "num_weekdays",
                "must be at least 1",
            ));
        }
        if request.num_share_classes == 0 {
            return Err(GeneratorError::invalid_parameter(
                "num_share_classes",
                "must be at least 1",
            ));
        }
        if FIRST_SHARECLASS_ID
            .checked_add(request.num_share_classes)
            .is_none()
        {
            return Err(GeneratorError::invalid_parameter(
                "num_share_classes",
                format!("{} exceeds the share class id range", request.num_share_classes),
            ));
        }
        if Self::cardinality(request).is_none() {
            return Err(GeneratorError::invalid_parameter(
                "num_weekdays",
                "dataset size overflows",
            ));
        }
        Ok(())
    }

    /// Generate the dataset for a request.
    ///
    /// # Errors
    ///
    /// `GeneratorError::InvalidParameter` for zero counts or a dataset that
    /// cannot be addressed.
    pub fn generate<R: RandomSource>(
        &self,
        request: &FundFigureRequest,
        rng: &mut R,
    ) -> Result<FundFigureDataset, GeneratorError> {
        self.validate(request)?;
        info!(
            start_date = %request.start_date,
            num_weekdays = request.num_weekdays,
            num_share_classes = request.num_share_classes,
            "Generating fund figures"
        );

        let dates = business_days(request.start_date, request.num_weekdays);
        if dates.len() < request.num_weekdays {
            return Err(GeneratorError::invalid_parameter(
                "num_weekdays",
                format!(
                    "calendar exhausted after {} business days from {}",
                    dates.len(),
                    request.start_date
                ),
            ));
        }

        let capacity = Self::cardinality(request).unwrap_or_default();
        let mut records = Vec::with_capacity(capacity);
        let shareclass_ids = FIRST_SHARECLASS_ID..FIRST_SHARECLASS_ID + request.num_share_classes;

        for shareclass_id in shareclass_ids {
            for series_type in SeriesType::ALL {
                for series_subtype in SeriesSubtype::ALL {
                    for qualifier in Qualifier::ALL {
                        for &value_date in &dates {
                            records.push(FundFigureRecord {
                                shareclass_id,
                                series_type,
                                series_subtype,
                                qualifier,
                                value: draw_value(rng),
                                value_date,
                            });
                        }
                    }
                }
            }
        }

        debug!(records = records.len(), "Fund figure expansion complete");
        Ok(FundFigureDataset::new(*request, records))
    }
}

/// Generate a fund-figure dataset from primitive parameters.
///
/// # Examples
///
/// ```
/// use randomize_core::types::Date;
/// use randomize_generators::fund_figures::generate_fund_figures;
/// use randomize_generators::rng::SeededRng;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let dataset = generate_fund_figures(start, 5, 1, &mut SeededRng::from_seed(3)).unwrap();
/// assert_eq!(dataset.len(), 300);
/// ```
pub fn generate_fund_figures<R: RandomSource>(
    start_date: Date,
    num_weekdays: usize,
    num_share_classes: u32,
    rng: &mut R,
) -> Result<FundFigureDataset, GeneratorError> {
    let request = FundFigureRequest {
        start_date,
        num_weekdays,
        num_share_classes,
    };
    FundFigureGenerator::new().generate(&request, rng)
}

fn draw_value<R: RandomSource>(rng: &mut R) -> f64 {
    let value = rng.sample_uniform(MIN_VALUE, MAX_VALUE);
    ((value * 100.0).round() / 100.0).clamp(MIN_VALUE, MAX_VALUE)
}
