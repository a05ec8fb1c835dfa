/// Addresses listed in the "top banned" ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// Floor for the elapsed-hours denominator of the ban rate, so the first
/// seconds of a run do not report absurd rates.
pub const MIN_RATE_HOURS: f64 = 0.01;
