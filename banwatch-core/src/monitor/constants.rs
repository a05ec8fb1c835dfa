use std::time::Duration;

/// How often the cadence loop checks for a shutdown request.
pub const SHUTDOWN_CHECK_INTERVAL: Duration = Duration::from_millis(100);
