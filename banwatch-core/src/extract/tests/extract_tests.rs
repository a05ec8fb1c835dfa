use crate::extract::{EventKind, SecurityEvent, extract_event};
use pretty_assertions::assert_eq;

#[test]
fn extracts_ban() {
    let line = "2024-01-01 10:00:00,000 fail2ban.actions [1]: NOTICE [sshd] Ban 1.2.3.4";

    let event = extract_event(line).unwrap();

    assert_eq!(
        event,
        SecurityEvent::new(EventKind::Ban, "2024-01-01 10:00:00,000", "sshd", "1.2.3.4")
    );
}

#[test]
fn extracts_unban() {
    let line = "2024-01-01 10:10:00,123 fail2ban.actions [1]: NOTICE [sshd] Unban 1.2.3.4";

    let event = extract_event(line).unwrap();

    assert_eq!(event.kind, EventKind::Unban);
    assert_eq!(event.jail, "sshd");
    assert_eq!(event.address, "1.2.3.4");
}

#[test]
fn extracts_detection_from_filter_logger() {
    let line = "2024-03-05 22:41:07,512 fail2ban.filter  [812]: INFO    [nginx-http-auth] Found 203.0.113.9 - 2024-03-05 22:41:07";

    let event = extract_event(line).unwrap();

    assert_eq!(event.kind, EventKind::Detection);
    assert_eq!(event.jail, "nginx-http-auth");
    assert_eq!(event.address, "203.0.113.9");
    assert_eq!(event.timestamp, "2024-03-05 22:41:07,512");
}

#[test]
fn tolerates_padded_logger_and_severity_columns() {
    let line = "2024-01-01 10:00:00,000 fail2ban.actions        [1234]: NOTICE  [postfix-sasl] Ban 2001:db8::1";

    let event = extract_event(line).unwrap();

    assert_eq!(event.kind, EventKind::Ban);
    assert_eq!(event.jail, "postfix-sasl");
    assert_eq!(event.address, "2001:db8::1");
}

#[test]
fn matches_inside_prefixed_lines() {
    let line = "Jan  1 10:00:00 host fail2ban: 2024-01-01 10:00:00,000 fail2ban.actions [1]: NOTICE [sshd] Ban 10.0.0.7";

    let event = extract_event(line).unwrap();

    assert_eq!(event.address, "10.0.0.7");
}

#[test]
fn ignores_unrelated_lines() {
    let lines = [
        "",
        "2024-01-01 10:00:00,000 fail2ban.server [1]: INFO Starting Fail2ban v1.0.2",
        "2024-01-01 10:00:00,000 fail2ban.jail [1]: INFO Jail 'sshd' started",
        "2024-01-01 10:00:00,000 fail2ban.actions [1]: NOTICE [sshd] Restore Ban 1.2.3.4",
        "2024-01-01 10:00:00,000 fail2ban.filter [1]: INFO [sshd] Ban 1.2.3.4",
        "2024-01-01 10:00:00,000 fail2ban.actions [1]: DEBUG [sshd] Ban 1.2.3.4",
        "someone typed Ban 1.2.3.4 in a chat message",
        "[sshd] Ban 1.2.3.4",
    ];

    for line in lines {
        assert_eq!(extract_event(line), None, "line should not match: {line:?}");
    }
}

#[test]
fn keeps_malformed_timestamp_text() {
    // Shape matches the template, but the date itself is impossible.
    let line = "2024-13-45 10:00:00,000 fail2ban.actions [1]: NOTICE [sshd] Ban 1.2.3.4";

    let event = extract_event(line).unwrap();

    assert_eq!(event.timestamp, "2024-13-45 10:00:00,000");
    assert!(event.parsed_time().is_err());
}
