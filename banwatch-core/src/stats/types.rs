use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Per-jail counters, one per event kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JailCounters {
    pub bans: u64,
    pub unbans: u64,
    pub detections: u64,
}

/// Calendar hour an event falls in, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket {
    date: NaiveDate,
    hour: u32,
}

impl HourBucket {
    pub fn containing(ts: NaiveDateTime) -> Self {
        Self {
            date: ts.date(),
            hour: ts.hour(),
        }
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}", self.date.format("%Y-%m-%d"), self.hour)
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Elapsed run time, rendered as `H:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runtime(pub Duration);

impl Runtime {
    pub fn hours(&self) -> f64 {
        self.0.as_secs_f64() / 3600.0
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(
            f,
            "{}:{:02}:{:02}",
            secs / 3600,
            (secs % 3600) / 60,
            secs % 60
        )
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressCount {
    pub address: String,
    pub bans: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JailBans {
    pub jail: String,
    pub bans: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    pub hour: HourBucket,
    pub bans: u64,
}
