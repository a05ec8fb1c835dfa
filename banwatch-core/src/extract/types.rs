use crate::extract::timestamp::{TimestampError, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Ban,
    Unban,
    Detection,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Ban => "ban",
            EventKind::Unban => "unban",
            EventKind::Detection => "detection",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One occurrence recognised in the fail2ban log.
///
/// The timestamp is kept as captured. Parsing is deferred to whoever needs a
/// point in time, because a malformed timestamp must not stop the event from
/// being counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityEvent {
    pub kind: EventKind,
    pub timestamp: String,
    pub jail: String,
    pub address: String,
}

impl SecurityEvent {
    pub fn new(
        kind: EventKind,
        timestamp: impl Into<String>,
        jail: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            timestamp: timestamp.into(),
            jail: jail.into(),
            address: address.into(),
        }
    }

    pub fn parsed_time(&self) -> Result<NaiveDateTime, TimestampError> {
        parse_timestamp(&self.timestamp)
    }
}
