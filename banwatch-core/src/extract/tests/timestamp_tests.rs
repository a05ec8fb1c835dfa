use crate::extract::{TimestampError, parse_timestamp};
use chrono::{NaiveDate, Timelike};

#[test]
fn parses_millisecond_timestamps() {
    let ts = parse_timestamp("2024-01-01 10:00:05,250").unwrap();

    let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_milli_opt(10, 0, 5, 250)
        .unwrap();
    assert_eq!(ts, expected);
}

#[test]
fn scales_fraction_by_digit_count() {
    assert_eq!(
        parse_timestamp("2024-01-01 10:00:05,5").unwrap().nanosecond(),
        500_000_000
    );
    assert_eq!(
        parse_timestamp("2024-01-01 10:00:05,123456").unwrap().nanosecond(),
        123_456_000
    );
}

#[test]
fn rejects_missing_fraction() {
    let err = parse_timestamp("2024-01-01 10:00:05").unwrap_err();
    assert!(matches!(err, TimestampError::MissingFraction { .. }));
}

#[test]
fn rejects_non_numeric_fraction() {
    let err = parse_timestamp("2024-01-01 10:00:05,12a").unwrap_err();
    assert!(matches!(err, TimestampError::InvalidFraction { .. }));
}

#[test]
fn rejects_impossible_dates() {
    let err = parse_timestamp("2024-02-30 10:00:05,000").unwrap_err();
    assert!(matches!(err, TimestampError::Invalid { .. }));
    assert!(err.to_string().contains("2024-02-30"));
}
