use crate::extract::types::{EventKind, SecurityEvent};
use once_cell::sync::Lazy;
use regex::Regex;

/// Captures shared by every template: timestamp, jail and address. The
/// severity tag is matched but not kept.
fn template(logger: &str, verb: &str) -> String {
    format!(
        r"(?P<ts>\d{{4}}-\d{{2}}-\d{{2}} \d{{2}}:\d{{2}}:\d{{2}},\d+) {logger}\s+\[\d+\]: (?:INFO|NOTICE)\s+\[(?P<jail>[^\]]+)\] {verb} (?P<addr>\S+)"
    )
}

struct Recognizer {
    kind: EventKind,
    pattern: Regex,
}

impl Recognizer {
    fn new(kind: EventKind, logger: &str, verb: &str) -> Self {
        let pattern = Regex::new(&template(logger, verb)).expect("recognizer template is valid");
        Self { kind, pattern }
    }

    fn recognize(&self, line: &str) -> Option<SecurityEvent> {
        let caps = self.pattern.captures(line)?;

        Some(SecurityEvent::new(
            self.kind,
            &caps["ts"],
            &caps["jail"],
            &caps["addr"],
        ))
    }
}

// Evaluated in order; the first match wins.
static RECOGNIZERS: Lazy<[Recognizer; 3]> = Lazy::new(|| {
    [
        Recognizer::new(EventKind::Ban, r"fail2ban\.actions", "Ban"),
        Recognizer::new(EventKind::Unban, r"fail2ban\.actions", "Unban"),
        Recognizer::new(EventKind::Detection, r"fail2ban\.filter", "Found"),
    ]
});

/// Map a log line to the event it records, if any.
///
/// The line is searched rather than prefix-matched, so syslog-style prefixes
/// in front of the fail2ban record are tolerated.
pub fn extract_event(line: &str) -> Option<SecurityEvent> {
    RECOGNIZERS.iter().find_map(|r| r.recognize(line))
}
