use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

/// Whole-second part of a fail2ban timestamp. The sub-second part follows a
/// comma and is handled separately (fail2ban writes milliseconds, but any
/// digit count is accepted).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const MAX_FRACTION_DIGITS: usize = 9;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp '{raw}' has no sub-second field")]
    MissingFraction { raw: String },

    #[error("timestamp '{raw}' has a malformed sub-second field")]
    InvalidFraction { raw: String },

    #[error("invalid timestamp '{raw}': {source}")]
    Invalid {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse `YYYY-MM-DD HH:MM:SS,fff` into a naive (log-local) datetime.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let (whole, fraction) = raw
        .split_once(',')
        .ok_or_else(|| TimestampError::MissingFraction {
            raw: raw.to_string(),
        })?;

    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimestampError::InvalidFraction {
            raw: raw.to_string(),
        });
    }

    let base = NaiveDateTime::parse_from_str(whole, TIMESTAMP_FORMAT).map_err(|source| {
        TimestampError::Invalid {
            raw: raw.to_string(),
            source,
        }
    })?;

    // Digits past nanosecond precision are dropped.
    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    let scale = 10u32.pow((MAX_FRACTION_DIGITS - digits.len()) as u32);
    let nanos = digits
        .parse::<u32>()
        .map_err(|_| TimestampError::InvalidFraction {
            raw: raw.to_string(),
        })?
        * scale;

    base.with_nanosecond(nanos)
        .ok_or_else(|| TimestampError::InvalidFraction {
            raw: raw.to_string(),
        })
}
