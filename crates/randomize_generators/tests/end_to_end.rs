//! End-to-end tests: generate, filter, export.

use randomize_core::types::{Date, Qualifier, SeriesSubtype, SeriesType};
use randomize_generators::prelude::*;
use randomize_generators::timeseries::DEFAULT_HISTOGRAM_BINS;

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

#[test]
fn test_default_dashboard_timeseries_export() {
    let generator = TimeseriesGenerator::new(TimeseriesConfig::dashboard());
    let table = generator
        .generate_table(&TimeseriesParams::default(), &mut SeededRng::from_seed(2020))
        .unwrap();

    assert_eq!(table.len(), 1250);
    assert_eq!(table.rows()[0].date, date(2020, 1, 1));
    assert_eq!(table.rows()[0].value, 100.0);
    assert!(table.values().iter().all(|v| *v > 0.0));

    let csv = table.to_csv_string().unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Time;Value;Daily Return"));
    assert_eq!(lines.next(), Some("2020-01-01;100.0;"));
    assert_eq!(csv.lines().count(), 1251);

    let histogram = table.return_histogram(DEFAULT_HISTOGRAM_BINS);
    assert_eq!(histogram.bins().len(), 50);
    assert_eq!(histogram.total(), 1249);
}

#[test]
fn test_basic_timeseries_export_has_two_columns() {
    let generator = TimeseriesGenerator::new(TimeseriesConfig::basic());
    let params = TimeseriesParams::new(20, 50.0, 5.0, -3.0);
    let table = generator
        .generate_table(&params, &mut SeededRng::from_seed(1))
        .unwrap();

    let csv = table.to_csv_string().unwrap();
    assert!(csv.starts_with("Time;Value\n"));
    assert!(csv.lines().skip(1).all(|line| line.split(';').count() == 2));
}

#[test]
fn test_fund_figure_filter_then_export() {
    let mut rng = SeededRng::from_seed(77);
    let dataset = generate_fund_figures(date(2024, 1, 1), 5, 3, &mut rng).unwrap();
    assert_eq!(dataset.len(), 900);
    assert_eq!(dataset.distinct_shareclass_ids(), vec![10, 11, 12]);
    assert_eq!(dataset.date_bounds(), Some((date(2024, 1, 1), date(2024, 1, 5))));

    let filter = FundFigureFilter::new()
        .with_shareclass_ids([11])
        .with_series_types([SeriesType::DISTR])
        .with_series_subtypes([SeriesSubtype::Subtype1, SeriesSubtype::Subtype5])
        .with_qualifiers([Qualifier::CHF])
        .with_date_range(date(2024, 1, 3), date(2024, 1, 3));
    let kept = dataset.filter(&filter);
    assert_eq!(kept.len(), 2);

    let csv = kept.to_csv_string().unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "shareclass_id;series_type;series_subtype;qualifier;value;value_date"
    );
    assert!(lines[1].starts_with("11;DISTR;subtype1;CHF;"));
    assert!(lines[1].ends_with(";2024-01-03"));
    assert!(lines[2].starts_with("11;DISTR;subtype5;CHF;"));
}

#[test]
fn test_filter_excluding_everything_exports_header_only() {
    let dataset =
        generate_fund_figures(date(2024, 1, 1), 2, 1, &mut SeededRng::from_seed(3)).unwrap();
    let filter = FundFigureFilter::new().with_shareclass_ids([99]);

    let kept = dataset.filter(&filter);
    assert!(kept.is_empty());
    assert_eq!(
        kept.to_csv_string().unwrap(),
        "shareclass_id;series_type;series_subtype;qualifier;value;value_date\n"
    );
}

#[test]
fn test_same_seed_same_dataset() {
    let a = generate_fund_figures(date(2024, 3, 1), 3, 2, &mut SeededRng::from_seed(5)).unwrap();
    let b = generate_fund_figures(date(2024, 3, 1), 3, 2, &mut SeededRng::from_seed(5)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_csv_string().unwrap(), b.to_csv_string().unwrap());
}

#[test]
fn test_session_round_trip_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GenerationSession::new(SeededRng::from_seed(10));

    let table = session
        .regenerate_timeseries(&TimeseriesGenerator::default(), &TimeseriesParams::new(30, 100.0, 10.0, 7.0))
        .unwrap();
    let path = dir.path().join(table.file_name());
    table.write_to_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 31);
    assert!(path.ends_with("timeseries.csv"));
}
