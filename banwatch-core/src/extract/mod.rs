//! Event extraction.
//!
//! Turns one raw fail2ban log line into at most one [`SecurityEvent`]. The
//! extractor is stateless: every line is judged on its own, so it can run on
//! the tail thread for an unbounded stream without coordination.
//!
//! line
//! extract_event
//! SecurityEvent (Ban | Unban | Detection)
//!

mod patterns;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use patterns::extract_event;
pub use timestamp::{TIMESTAMP_FORMAT, TimestampError, parse_timestamp};
pub use types::{EventKind, SecurityEvent};
