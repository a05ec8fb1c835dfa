use banwatch_core::extract::extract_event;
use banwatch_core::stats::AggregateStore;
use integration_tests::harness::{ban_line, captured_events, init_test_tracing};
use tracing::Level;

/// A ban whose timestamp matches the line shape but is not a real date still
/// counts, and leaves a warning behind instead of an hourly bucket
#[test]
fn impossible_ban_timestamp_is_counted_and_warned() {
    // Arrange
    init_test_tracing();
    let store = AggregateStore::default();
    let line = ban_line("2024-13-45 10:00:00,000", "sshd", "203.0.113.77");

    // Act
    let event = extract_event(&line).unwrap();
    store.record(&event);

    // Assert
    let summary = store.snapshot();
    assert_eq!(summary.total_bans, 1);
    assert!(summary.hourly_bans.is_empty());

    let warned = captured_events().into_iter().any(|e| {
        e.level == Level::WARN
            && e.field("address") == Some("203.0.113.77")
            && e.message()
                .is_some_and(|m| m.contains("ban timestamp unparseable"))
    });
    assert!(warned, "expected a warning for the unparseable timestamp");
}

/// Every recorded event is echoed at debug level with its jail and address
#[test]
fn recorded_events_are_echoed() {
    // Arrange
    init_test_tracing();
    let store = AggregateStore::default();
    let line = ban_line("2024-01-01 10:00:00,000", "recidive", "198.51.100.4");

    // Act
    store.record(&extract_event(&line).unwrap());

    // Assert
    let echoed = captured_events().into_iter().any(|e| {
        e.level == Level::DEBUG
            && e.field("jail") == Some("recidive")
            && e.field("address") == Some("198.51.100.4")
    });
    assert!(echoed, "expected a debug echo of the recorded event");
}
