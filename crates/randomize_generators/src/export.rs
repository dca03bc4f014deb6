//! CSV export.
//!
//! Every export is semicolon separated, has a header row and no index
//! column. Dates are written `YYYY-MM-DD`; floats use the shortest
//! round-trip representation with a trailing `.0` for integral values and a
//! two-digit signed exponent (`1e-05`), and missing values are empty fields.
//!
//! | Export | Header |
//! |--------|--------|
//! | Timeseries | `Time;Value` or `Time;Value;Daily Return` |
//! | Fund figures | `shareclass_id;series_type;series_subtype;qualifier;value;value_date` |

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::fund_figures::{FundFigureDataset, FundFigureRecord};
use crate::timeseries::TimeseriesTable;

/// Field delimiter of every export.
pub const CSV_DELIMITER: u8 = b';';

/// Timeseries header without the return column.
pub const TIMESERIES_HEADER: [&str; 2] = ["Time", "Value"];

/// Label of the optional return column.
pub const DAILY_RETURN_COLUMN: &str = "Daily Return";

/// Fund-figure header.
pub const FUND_FIGURE_HEADER: [&str; 6] = [
    "shareclass_id",
    "series_type",
    "series_subtype",
    "qualifier",
    "value",
    "value_date",
];

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Output was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Types that can be written as a semicolon separated CSV table.
pub trait CsvExport {
    /// Suggested download file name.
    fn file_name(&self) -> &'static str;

    /// Write the table to `writer`.
    fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError>;

    /// Render the table as a string.
    fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Write to file
    fn write_to_file(&self, path: &Path) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        self.write_csv(std::io::BufWriter::new(file))?;
        info!(path = %path.display(), "CSV export written");
        Ok(())
    }
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(CSV_DELIMITER)
        .from_writer(writer)
}

/// Format a float the way the dashboards' CSV exports do.
///
/// # Examples
///
/// ```
/// use randomize_generators::export::format_float;
///
/// assert_eq!(format_float(100.0), "100.0");
/// assert_eq!(format_float(1234.57), "1234.57");
/// assert_eq!(format_float(0.00001), "1e-05");
/// assert_eq!(format_float(f64::NAN), "");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::new();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

impl CsvExport for TimeseriesTable {
    fn file_name(&self) -> &'static str {
        "timeseries.csv"
    }

    fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv_writer(writer);

        if self.include_returns() {
            let [time, value] = TIMESERIES_HEADER;
            csv.write_record([time, value, DAILY_RETURN_COLUMN])?;
        } else {
            csv.write_record(TIMESERIES_HEADER)?;
        }

        for row in self.rows() {
            let date = row.date.to_string();
            let value = format_float(row.value);
            if self.include_returns() {
                let daily_return = row.daily_return.map(format_float).unwrap_or_default();
                csv.write_record([date, value, daily_return])?;
            } else {
                csv.write_record([date, value])?;
            }
        }

        csv.flush()?;
        Ok(())
    }
}

impl CsvExport for [FundFigureRecord] {
    fn file_name(&self) -> &'static str {
        "fund_figures.csv"
    }

    fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        let mut csv = csv_writer(writer);
        csv.write_record(FUND_FIGURE_HEADER)?;

        for record in self {
            csv.write_record([
                record.shareclass_id.to_string(),
                record.series_type.to_string(),
                record.series_subtype.to_string(),
                record.qualifier.to_string(),
                format_float(record.value),
                record.value_date.to_string(),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

impl CsvExport for FundFigureDataset {
    fn file_name(&self) -> &'static str {
        self.records().file_name()
    }

    fn write_csv<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        self.records().write_csv(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeseries::TimeseriesRow;
    use randomize_core::types::{Date, Qualifier, SeriesSubtype, SeriesType};

    fn d(day: u32) -> Date {
        Date::from_ymd(2024, 1, day).unwrap()
    }

    fn table(include_returns: bool) -> TimeseriesTable {
        TimeseriesTable::new(
            vec![
                TimeseriesRow {
                    date: d(1),
                    value: 100.0,
                    daily_return: None,
                },
                TimeseriesRow {
                    date: d(2),
                    value: 110.0,
                    daily_return: Some(10.0),
                },
                TimeseriesRow {
                    date: d(3),
                    value: 104.5,
                    daily_return: Some(-5.0),
                },
            ],
            include_returns,
        )
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(100.0), "100.0");
        assert_eq!(format_float(-5.0), "-5.0");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1.5e-7), "1.5e-07");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.2e123), "1.2e+123");
        assert_eq!(format_float(f64::INFINITY), "inf");
    }

    #[test]
    fn test_timeseries_csv_without_returns() {
        let csv = table(false).to_csv_string().unwrap();
        assert_eq!(
            csv,
            "Time;Value\n2024-01-01;100.0\n2024-01-02;110.0\n2024-01-03;104.5\n"
        );
    }

    #[test]
    fn test_timeseries_csv_with_returns() {
        let csv = table(true).to_csv_string().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Time;Value;Daily Return");
        assert_eq!(lines[1], "2024-01-01;100.0;");
        assert_eq!(lines[2], "2024-01-02;110.0;10.0");
        assert_eq!(lines[3], "2024-01-03;104.5;-5.0");
    }

    #[test]
    fn test_fund_figures_csv() {
        let records = [FundFigureRecord {
            shareclass_id: 10,
            series_type: SeriesType::FXRATES,
            series_subtype: SeriesSubtype::Subtype3,
            qualifier: Qualifier::EUR,
            value: 12345.6,
            value_date: d(2),
        }];
        let csv = records.to_csv_string().unwrap();
        assert_eq!(
            csv,
            "shareclass_id;series_type;series_subtype;qualifier;value;value_date\n\
             10;FXRATES;subtype3;EUR;12345.6;2024-01-02\n"
        );
    }

    #[test]
    fn test_empty_fund_figures_csv_has_header() {
        let records: [FundFigureRecord; 0] = [];
        let csv = records.to_csv_string().unwrap();
        assert_eq!(
            csv,
            "shareclass_id;series_type;series_subtype;qualifier;value;value_date\n"
        );
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timeseries.csv");
        table(true).write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Time;Value;Daily Return\n"));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(table(false).file_name(), "timeseries.csv");
        let records: [FundFigureRecord; 0] = [];
        assert_eq!(records.file_name(), "fund_figures.csv");
    }
}
