//! Rolling aggregate statistics.
//!
//! [`AggregateStore`] owns every counter behind one lock. Events go in through
//! [`AggregateStore::record`]; point-in-time copies come out through
//! [`AggregateStore::snapshot`] and [`AggregateStore::detailed_snapshot`].
//! Nothing outside this module touches the lock.
//!
//! SecurityEvent
//! AggregateStore::record
//! AggregateState
//! Summary / StatsSnapshot
//!

mod constants;
mod snapshot;
mod store;
mod types;

#[cfg(test)]
mod tests;

pub use constants::{DEFAULT_TOP_N, MIN_RATE_HOURS};
pub use snapshot::{AddressEntry, StatsSnapshot, Summary};
pub use store::AggregateStore;
pub use types::{AddressCount, HourBucket, HourlyCount, JailBans, JailCounters, Runtime};
