use crate::stats::{HourBucket, Runtime};
use chrono::NaiveDate;
use std::time::Duration;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

#[test]
fn hour_bucket_truncates_to_hour() {
    let a = HourBucket::containing(at(2024, 1, 1, 7, 0));
    let b = HourBucket::containing(at(2024, 1, 1, 7, 59));

    assert_eq!(a, b);
    assert_eq!(a.to_string(), "2024-01-01 07");
}

#[test]
fn hour_bucket_orders_chronologically() {
    let late_day = HourBucket::containing(at(2024, 1, 1, 23, 0));
    let next_day = HourBucket::containing(at(2024, 1, 2, 0, 0));

    assert!(late_day < next_day);
}

#[test]
fn hour_bucket_serializes_as_label() {
    let bucket = HourBucket::containing(at(2024, 12, 31, 5, 30));
    assert_eq!(serde_json::to_string(&bucket).unwrap(), "\"2024-12-31 05\"");
}

#[test]
fn runtime_renders_hours_minutes_seconds() {
    assert_eq!(Runtime(Duration::from_secs(0)).to_string(), "0:00:00");
    assert_eq!(Runtime(Duration::from_millis(3_723_900)).to_string(), "1:02:03");
    assert_eq!(Runtime(Duration::from_secs(90_061)).to_string(), "25:01:01");
}
