//! Log file tailing.
//!
//! A [`Tailer`] follows a growing, append-only log on a dedicated thread. It
//! polls on a short cadence, reads whatever was appended since the last
//! recorded offset, and feeds each complete line through the extractor into
//! the [`AggregateStore`](crate::stats::AggregateStore).
//!
//! Uninitialized -> Seeking -> Polling -> Stopped
//!                     |          ^
//!                     v          |
//!                WaitingForFile -+
//!

mod constants;
mod cursor;
mod settings;
mod tailer;


pub use constants::*;
pub use settings::TailSettings;
pub use tailer::{TailError, TailState, Tailer};
